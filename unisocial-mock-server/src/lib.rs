//! In-memory stand-in for the unisocial REST backend, for use in tests.
//! State lives in plain maps; comments are stored flat and in insertion
//! order, which is also `created_at` order, exactly like the real list
//! endpoint.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Utc;
use unisocial_api::{
    Analytics, AuthToken, AuthorType, ChatRoom, Club, ClubId, ClubMembership, ClubRole, CommentId,
    CommentRecord, Credentials, Error, Event, EventId, LikeStatus, MediaType, MembershipId,
    MembershipState, MembershipStatus, Message, MessageId, NewAccount, NewClub, NewComment,
    NewEvent, NewMessage, NewPost, Post, PostId, ProfilePatch, Role, RoomId, RoomType, Session,
    Time, User, UserId,
};
use uuid::Uuid;

// Low cost keeps test registration fast; the real backend uses its own
// work factor.
const BCRYPT_TEST_COST: u32 = 4;

pub struct MockServer {
    accounts: BTreeMap<UserId, Account>,
    sessions: HashMap<AuthToken, UserId>,
    posts: BTreeMap<PostId, DbPost>,
    likes: HashMap<PostId, HashSet<UserId>>,
    comments: HashMap<PostId, Vec<CommentRecord>>,
    clubs: BTreeMap<ClubId, DbClub>,
    memberships: BTreeMap<MembershipId, DbMembership>,
    events: BTreeMap<EventId, Event>,
    rooms: BTreeMap<RoomId, DbRoom>,
    messages: HashMap<RoomId, Vec<Message>>,
    next_id: i64,
}

#[derive(Debug)]
struct Account {
    user: User,
    pass: String,
    pass_hash: String,
}

#[derive(Debug)]
struct DbPost {
    id: PostId,
    author: UserId,
    author_type: AuthorType,
    content_text: String,
    media_url: Option<String>,
    media_type: Option<MediaType>,
    created_at: Time,
}

#[derive(Debug)]
struct DbClub {
    id: ClubId,
    name: String,
    description: String,
    logo_url: Option<String>,
    verified: Option<bool>,
    created_by: UserId,
    created_at: Time,
}

#[derive(Debug)]
struct DbMembership {
    id: MembershipId,
    club: ClubId,
    user: UserId,
    status: MembershipStatus,
    role: ClubRole,
    joined_at: Time,
}

#[derive(Debug)]
struct DbRoom {
    id: RoomId,
    room_type: RoomType,
    club: Option<ClubId>,
    participants: Vec<UserId>,
    created_at: Time,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            accounts: BTreeMap::new(),
            sessions: HashMap::new(),
            posts: BTreeMap::new(),
            likes: HashMap::new(),
            comments: HashMap::new(),
            clubs: BTreeMap::new(),
            memberships: BTreeMap::new(),
            events: BTreeMap::new(),
            rooms: BTreeMap::new(),
            messages: HashMap::new(),
            next_id: 0,
        }
    }

    /// Return email & password for account number `n`
    pub fn test_get_account(&self, n: usize) -> (&str, &str) {
        let a = self
            .accounts
            .values()
            .nth(n)
            .unwrap_or_else(|| panic!("getting account {n} among {}", self.accounts.len()));
        (&a.user.email, &a.pass)
    }

    /// Return the current number of accounts
    pub fn test_num_accounts(&self) -> usize {
        self.accounts.len()
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn mint(&mut self, user: UserId) -> AuthToken {
        let tok = AuthToken(Uuid::new_v4().to_string());
        self.sessions.insert(tok.clone(), user);
        tok
    }

    fn resolve(&self, tok: &AuthToken) -> Result<&Account, Error> {
        self.sessions
            .get(tok)
            .and_then(|uid| self.accounts.get(uid))
            .ok_or(Error::PermissionDenied)
    }

    fn create_account(&mut self, a: NewAccount, role: Role) -> Result<Session, Error> {
        a.validate()?;
        if self.accounts.values().any(|acc| acc.user.email == a.email) {
            return Err(Error::EmailAlreadyUsed(a.email));
        }
        if self.accounts.values().any(|acc| acc.user.reg_no == a.reg_no) {
            return Err(Error::RegNoAlreadyUsed(a.reg_no));
        }
        let id = UserId(self.next_id());
        let pass_hash = bcrypt::hash(&a.password, BCRYPT_TEST_COST)
            .map_err(|e| Error::Unknown(format!("hashing password: {e}")))?;
        let user = User {
            id,
            reg_no: a.reg_no,
            email: a.email,
            name: a.name,
            role,
            bio: None,
            dp_url: None,
            created_at: Utc::now(),
        };
        self.accounts.insert(
            id,
            Account {
                user: user.clone(),
                pass: a.password,
                pass_hash,
            },
        );
        let token = self.mint(id);
        Ok(Session { token, user })
    }

    pub fn register(&mut self, a: NewAccount) -> Result<Session, Error> {
        self.create_account(a, Role::User)
    }

    /// Accounts with moderation rights are seeded, never self-registered.
    pub fn admin_create_account(&mut self, a: NewAccount) -> Result<Session, Error> {
        self.create_account(a, Role::Admin)
    }

    pub fn login(&mut self, c: Credentials) -> Result<Session, Error> {
        c.validate()?;
        let account = self
            .accounts
            .values()
            .find(|a| a.user.email == c.email)
            .ok_or(Error::InvalidCredentials)?;
        if !bcrypt::verify(&c.password, &account.pass_hash).unwrap_or(false) {
            return Err(Error::InvalidCredentials);
        }
        let user = account.user.clone();
        let token = self.mint(user.id);
        Ok(Session { token, user })
    }

    pub fn whoami(&self, tok: &AuthToken) -> Result<User, Error> {
        Ok(self.resolve(tok)?.user.clone())
    }

    pub fn update_profile(&mut self, tok: &AuthToken, p: ProfilePatch) -> Result<User, Error> {
        p.validate()?;
        let me = self.resolve(tok)?.user.id;
        let account = self
            .accounts
            .get_mut(&me)
            .ok_or(Error::PermissionDenied)?;
        if let Some(name) = p.name {
            account.user.name = name;
        }
        if let Some(bio) = p.bio {
            account.user.bio = Some(bio);
        }
        if let Some(dp_url) = p.dp_url {
            account.user.dp_url = Some(dp_url);
        }
        Ok(account.user.clone())
    }

    pub fn user(&self, tok: &AuthToken, id: UserId) -> Result<User, Error> {
        self.resolve(tok)?;
        Ok(self
            .accounts
            .get(&id)
            .ok_or_else(|| Error::NotFound(format!("user {}", id.0)))?
            .user
            .clone())
    }

    pub fn create_post(&mut self, tok: &AuthToken, p: NewPost) -> Result<Post, Error> {
        p.validate()?;
        let me = self.resolve(tok)?.user.id;
        let post = DbPost {
            id: PostId(self.next_id()),
            author: me,
            author_type: AuthorType::User,
            content_text: p.content_text,
            media_url: p.media_url,
            media_type: p.media_type,
            created_at: Utc::now(),
        };
        let rendered = self.render_post(&post, me);
        self.posts.insert(post.id, post);
        Ok(rendered)
    }

    pub fn delete_post(&mut self, tok: &AuthToken, id: PostId) -> Result<(), Error> {
        let viewer = self.resolve(tok)?.user.clone();
        let post = self
            .posts
            .get(&id)
            .ok_or_else(|| Error::NotFound(format!("post {}", id.0)))?;
        if post.author != viewer.id && viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        self.posts.remove(&id);
        self.comments.remove(&id);
        self.likes.remove(&id);
        Ok(())
    }

    /// The feed is newest-first; ids are allocated in creation order, so the
    /// reverse of the id order is exactly that.
    pub fn feed(&self, tok: &AuthToken) -> Result<Vec<Post>, Error> {
        let viewer = self.resolve(tok)?.user.id;
        Ok(self
            .posts
            .values()
            .rev()
            .map(|p| self.render_post(p, viewer))
            .collect())
    }

    pub fn like(&mut self, tok: &AuthToken, post: PostId) -> Result<LikeStatus, Error> {
        let viewer = self.resolve(tok)?.user.id;
        if !self.posts.contains_key(&post) {
            return Err(Error::NotFound(format!("post {}", post.0)));
        }
        self.likes.entry(post).or_insert_with(HashSet::new).insert(viewer);
        Ok(self.like_status(post, viewer))
    }

    pub fn unlike(&mut self, tok: &AuthToken, post: PostId) -> Result<LikeStatus, Error> {
        let viewer = self.resolve(tok)?.user.id;
        if !self.posts.contains_key(&post) {
            return Err(Error::NotFound(format!("post {}", post.0)));
        }
        if let Some(likers) = self.likes.get_mut(&post) {
            likers.remove(&viewer);
        }
        Ok(self.like_status(post, viewer))
    }

    pub fn add_comment(
        &mut self,
        tok: &AuthToken,
        post: PostId,
        c: NewComment,
    ) -> Result<CommentRecord, Error> {
        c.validate()?;
        let author = self.resolve(tok)?.user.clone();
        if !self.posts.contains_key(&post) {
            return Err(Error::NotFound(format!("post {}", post.0)));
        }
        // Replying to a comment that is not on this post (or not anywhere)
        // is refused up front, like the real backend does.
        if let Some(parent) = c.parent_id {
            let known = self
                .comments
                .get(&post)
                .map_or(false, |list| list.iter().any(|r| r.id == parent));
            if !known {
                return Err(Error::NotFound(format!("parent comment {}", parent.0)));
            }
        }
        let record = CommentRecord {
            id: CommentId(self.next_id()),
            post_id: post,
            author_id: author.id,
            author_name: author.name,
            author_dp_url: author.dp_url,
            content: c.content,
            created_at: Utc::now(),
            parent_id: c.parent_id,
        };
        self.comments
            .entry(post)
            .or_insert_with(Vec::new)
            .push(record.clone());
        Ok(record)
    }

    /// Flat comment list in `created_at` ascending order (insertion order).
    pub fn post_comments(&self, tok: &AuthToken, post: PostId) -> Result<Vec<CommentRecord>, Error> {
        self.resolve(tok)?;
        if !self.posts.contains_key(&post) {
            return Err(Error::NotFound(format!("post {}", post.0)));
        }
        Ok(self.comments.get(&post).cloned().unwrap_or_default())
    }

    pub fn create_club(&mut self, tok: &AuthToken, c: NewClub) -> Result<Club, Error> {
        c.validate()?;
        let me = self.resolve(tok)?.user.id;
        if self.clubs.values().any(|club| club.name == c.name) {
            return Err(Error::NameAlreadyUsed(c.name));
        }
        let club = DbClub {
            id: ClubId(self.next_id()),
            name: c.name,
            description: c.description.unwrap_or_default(),
            logo_url: c.logo_url,
            verified: None,
            created_by: me,
            created_at: Utc::now(),
        };
        let id = club.id;
        self.clubs.insert(id, club);
        // The founder is immediately an approved club admin.
        let membership = DbMembership {
            id: MembershipId(self.next_id()),
            club: id,
            user: me,
            status: MembershipStatus::Approved,
            role: ClubRole::Admin,
            joined_at: Utc::now(),
        };
        self.memberships.insert(membership.id, membership);
        Ok(self.render_club(&self.clubs[&id]))
    }

    pub fn clubs(&self, tok: &AuthToken) -> Result<Vec<Club>, Error> {
        self.resolve(tok)?;
        Ok(self.clubs.values().map(|c| self.render_club(c)).collect())
    }

    pub fn join_club(&mut self, tok: &AuthToken, club: ClubId) -> Result<ClubMembership, Error> {
        let me = self.resolve(tok)?.user.id;
        if !self.clubs.contains_key(&club) {
            return Err(Error::NotFound(format!("club {}", club.0)));
        }
        if self
            .memberships
            .values()
            .any(|m| m.club == club && m.user == me)
        {
            // The real backend throws an unhandled exception here.
            return Err(Error::Unknown(String::from("membership already exists")));
        }
        let membership = DbMembership {
            id: MembershipId(self.next_id()),
            club,
            user: me,
            status: MembershipStatus::Pending,
            role: ClubRole::Member,
            joined_at: Utc::now(),
        };
        let id = membership.id;
        self.memberships.insert(id, membership);
        Ok(self.render_membership(&self.memberships[&id]))
    }

    pub fn membership_status(
        &self,
        tok: &AuthToken,
        club: ClubId,
    ) -> Result<MembershipState, Error> {
        let me = self.resolve(tok)?.user.id;
        if !self.clubs.contains_key(&club) {
            return Err(Error::NotFound(format!("club {}", club.0)));
        }
        let m = self
            .memberships
            .values()
            .find(|m| m.club == club && m.user == me);
        Ok(MembershipState {
            is_member: m.map_or(false, |m| m.status == MembershipStatus::Approved),
            status: m.map(|m| m.status),
            role: m.map(|m| m.role),
            membership_id: m.map(|m| m.id),
        })
    }

    pub fn club_members(
        &self,
        tok: &AuthToken,
        club: ClubId,
    ) -> Result<Vec<ClubMembership>, Error> {
        self.resolve(tok)?;
        if !self.clubs.contains_key(&club) {
            return Err(Error::NotFound(format!("club {}", club.0)));
        }
        Ok(self
            .memberships
            .values()
            .filter(|m| m.club == club && m.status == MembershipStatus::Approved)
            .map(|m| self.render_membership(m))
            .collect())
    }

    pub fn pending_memberships(
        &self,
        tok: &AuthToken,
        club: ClubId,
    ) -> Result<Vec<ClubMembership>, Error> {
        let viewer = self.resolve(tok)?.user.clone();
        if !self.is_club_admin(viewer.id, club) && viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        Ok(self
            .memberships
            .values()
            .filter(|m| m.club == club && m.status == MembershipStatus::Pending)
            .map(|m| self.render_membership(m))
            .collect())
    }

    pub fn approve_membership(&mut self, tok: &AuthToken, id: MembershipId) -> Result<(), Error> {
        self.review_membership(tok, id, MembershipStatus::Approved)
    }

    pub fn reject_membership(&mut self, tok: &AuthToken, id: MembershipId) -> Result<(), Error> {
        self.review_membership(tok, id, MembershipStatus::Rejected)
    }

    fn review_membership(
        &mut self,
        tok: &AuthToken,
        id: MembershipId,
        status: MembershipStatus,
    ) -> Result<(), Error> {
        let viewer = self.resolve(tok)?.user.clone();
        let club = self
            .memberships
            .get(&id)
            .ok_or_else(|| Error::NotFound(format!("membership {}", id.0)))?
            .club;
        if !self.is_club_admin(viewer.id, club) && viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        if let Some(m) = self.memberships.get_mut(&id) {
            m.status = status;
        }
        Ok(())
    }

    pub fn create_event(
        &mut self,
        tok: &AuthToken,
        club: ClubId,
        e: NewEvent,
    ) -> Result<Event, Error> {
        e.validate()?;
        let me = self.resolve(tok)?.user.id;
        let club_name = self
            .clubs
            .get(&club)
            .ok_or_else(|| Error::NotFound(format!("club {}", club.0)))?
            .name
            .clone();
        if !self.is_club_admin(me, club) {
            return Err(Error::PermissionDenied);
        }
        let event = Event {
            id: EventId(self.next_id()),
            club_id: club,
            club_name,
            title: e.title,
            description: e.description,
            banner_url: e.banner_url,
            location: e.location,
            start_time: e.start_time,
            end_time: e.end_time,
            registration_link: e.registration_link,
            registration_deadline: e.registration_deadline,
            od_provided: e.od_provided,
            created_at: Utc::now(),
        };
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    pub fn events(&self, tok: &AuthToken) -> Result<Vec<Event>, Error> {
        self.resolve(tok)?;
        let mut events: Vec<Event> = self.events.values().cloned().collect();
        events.sort_by_key(|e| (e.start_time, e.id));
        Ok(events)
    }

    pub fn start_private_chat(&mut self, tok: &AuthToken, other: UserId) -> Result<ChatRoom, Error> {
        let me = self.resolve(tok)?.user.id;
        if !self.accounts.contains_key(&other) {
            return Err(Error::NotFound(format!("user {}", other.0)));
        }
        if let Some(room) = self.rooms.values().find(|r| {
            r.room_type == RoomType::Private
                && r.participants.contains(&me)
                && r.participants.contains(&other)
        }) {
            return Ok(self.render_room(room));
        }
        let room = DbRoom {
            id: RoomId(self.next_id()),
            room_type: RoomType::Private,
            club: None,
            participants: vec![me, other],
            created_at: Utc::now(),
        };
        let id = room.id;
        self.rooms.insert(id, room);
        Ok(self.render_room(&self.rooms[&id]))
    }

    pub fn start_group_chat(&mut self, tok: &AuthToken, club: ClubId) -> Result<ChatRoom, Error> {
        let me = self.resolve(tok)?.user.id;
        if !self.clubs.contains_key(&club) {
            return Err(Error::NotFound(format!("club {}", club.0)));
        }
        if !self.is_approved_member(me, club) {
            return Err(Error::PermissionDenied);
        }
        if let Some(room) = self.rooms.values().find(|r| r.club == Some(club)) {
            return Ok(self.render_room(room));
        }
        let room = DbRoom {
            id: RoomId(self.next_id()),
            room_type: RoomType::Group,
            club: Some(club),
            participants: Vec::new(),
            created_at: Utc::now(),
        };
        let id = room.id;
        self.rooms.insert(id, room);
        Ok(self.render_room(&self.rooms[&id]))
    }

    pub fn rooms(&self, tok: &AuthToken) -> Result<Vec<ChatRoom>, Error> {
        let me = self.resolve(tok)?.user.id;
        Ok(self
            .rooms
            .values()
            .filter(|r| self.can_access_room(me, r))
            .map(|r| self.render_room(r))
            .collect())
    }

    pub fn send_message(
        &mut self,
        tok: &AuthToken,
        room: RoomId,
        m: NewMessage,
    ) -> Result<Message, Error> {
        m.validate()?;
        let sender = self.resolve(tok)?.user.clone();
        let db_room = self
            .rooms
            .get(&room)
            .ok_or_else(|| Error::NotFound(format!("chat room {}", room.0)))?;
        if !self.can_access_room(sender.id, db_room) {
            return Err(Error::PermissionDenied);
        }
        let message = Message {
            id: MessageId(self.next_id()),
            room_id: room,
            sender_id: sender.id,
            sender_name: sender.name,
            content: m.content,
            sent_at: Utc::now(),
            read: false,
        };
        self.messages
            .entry(room)
            .or_insert_with(Vec::new)
            .push(message.clone());
        Ok(message)
    }

    /// Message list in `sent_at` ascending order (insertion order).
    pub fn messages(&self, tok: &AuthToken, room: RoomId) -> Result<Vec<Message>, Error> {
        let me = self.resolve(tok)?.user.id;
        let db_room = self
            .rooms
            .get(&room)
            .ok_or_else(|| Error::NotFound(format!("chat room {}", room.0)))?;
        if !self.can_access_room(me, db_room) {
            return Err(Error::PermissionDenied);
        }
        Ok(self.messages.get(&room).cloned().unwrap_or_default())
    }

    pub fn verify_club(&mut self, tok: &AuthToken, club: ClubId) -> Result<(), Error> {
        let viewer = self.resolve(tok)?.user.clone();
        if viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        match self.clubs.get_mut(&club) {
            None => Err(Error::NotFound(format!("club {}", club.0))),
            Some(c) => {
                c.verified = Some(true);
                Ok(())
            }
        }
    }

    pub fn delete_user(&mut self, tok: &AuthToken, user: UserId) -> Result<(), Error> {
        let viewer = self.resolve(tok)?.user.clone();
        if viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        if self.accounts.remove(&user).is_none() {
            return Err(Error::NotFound(format!("user {}", user.0)));
        }
        self.sessions.retain(|_, uid| *uid != user);
        Ok(())
    }

    pub fn analytics(&self, tok: &AuthToken) -> Result<Analytics, Error> {
        let viewer = self.resolve(tok)?.user.clone();
        if viewer.role != Role::Admin {
            return Err(Error::PermissionDenied);
        }
        let active: HashSet<UserId> = self.sessions.values().copied().collect();
        Ok(Analytics {
            total_users: self.accounts.len() as u64,
            total_clubs: self.clubs.len() as u64,
            verified_clubs: self
                .clubs
                .values()
                .filter(|c| c.verified == Some(true))
                .count() as u64,
            total_posts: self.posts.len() as u64,
            total_events: self.events.len() as u64,
            total_comments: self.comments.values().map(|c| c.len() as u64).sum(),
            total_likes: self.likes.values().map(|l| l.len() as u64).sum(),
            active_users: active.len() as u64,
        })
    }

    fn like_status(&self, post: PostId, viewer: UserId) -> LikeStatus {
        let likers = self.likes.get(&post);
        LikeStatus {
            post_id: post,
            total_likes: likers.map_or(0, |l| l.len() as u64),
            liked_by_current_user: likers.map_or(false, |l| l.contains(&viewer)),
        }
    }

    fn is_approved_member(&self, user: UserId, club: ClubId) -> bool {
        self.memberships
            .values()
            .any(|m| m.club == club && m.user == user && m.status == MembershipStatus::Approved)
    }

    fn is_club_admin(&self, user: UserId, club: ClubId) -> bool {
        self.memberships.values().any(|m| {
            m.club == club
                && m.user == user
                && m.status == MembershipStatus::Approved
                && m.role == ClubRole::Admin
        })
    }

    fn can_access_room(&self, user: UserId, room: &DbRoom) -> bool {
        match room.club {
            Some(club) => self.is_approved_member(user, club),
            None => room.participants.contains(&user),
        }
    }

    fn render_post(&self, p: &DbPost, viewer: UserId) -> Post {
        let author = self.accounts.get(&p.author).map(|a| &a.user);
        let status = self.like_status(p.id, viewer);
        Post {
            id: p.id,
            content_text: p.content_text.clone(),
            media_url: p.media_url.clone(),
            media_type: p.media_type,
            author_id: p.author,
            author_name: author.map(|u| u.name.clone()).unwrap_or_default(),
            author_dp_url: author.and_then(|u| u.dp_url.clone()),
            author_type: p.author_type,
            created_at: p.created_at,
            like_count: status.total_likes,
            comment_count: self.comments.get(&p.id).map_or(0, |c| c.len() as u64),
            liked_by_current_user: Some(status.liked_by_current_user),
        }
    }

    fn render_club(&self, c: &DbClub) -> Club {
        Club {
            id: c.id,
            name: c.name.clone(),
            description: c.description.clone(),
            logo_url: c.logo_url.clone(),
            category: None,
            verified: c.verified,
            member_count: Some(
                self.memberships
                    .values()
                    .filter(|m| m.club == c.id && m.status == MembershipStatus::Approved)
                    .count() as u64,
            ),
            created_at: c.created_at,
            created_by: Some(c.created_by),
        }
    }

    fn render_membership(&self, m: &DbMembership) -> ClubMembership {
        let club = self.clubs.get(&m.club);
        ClubMembership {
            id: m.id,
            club_id: m.club,
            club_name: club.map(|c| c.name.clone()).unwrap_or_default(),
            club_verified: club.map_or(false, |c| c.verified == Some(true)),
            user_id: m.user,
            user_name: self
                .accounts
                .get(&m.user)
                .map(|a| a.user.name.clone())
                .unwrap_or_default(),
            status: m.status,
            role: m.role,
            joined_at: m.joined_at,
        }
    }

    fn render_room(&self, r: &DbRoom) -> ChatRoom {
        let participants = match r.club {
            Some(club) => self
                .memberships
                .values()
                .filter(|m| m.club == club && m.status == MembershipStatus::Approved)
                .filter_map(|m| self.accounts.get(&m.user))
                .map(|a| a.user.clone())
                .collect(),
            None => r
                .participants
                .iter()
                .filter_map(|uid| self.accounts.get(uid))
                .map(|a| a.user.clone())
                .collect(),
        };
        ChatRoom {
            id: r.id,
            room_type: r.room_type,
            club: r.club.and_then(|c| self.clubs.get(&c)).map(|c| self.render_club(c)),
            created_at: r.created_at,
            last_message: self
                .messages
                .get(&r.id)
                .and_then(|m| m.last())
                .cloned(),
            participants: Some(participants),
        }
    }
}

impl Default for MockServer {
    fn default() -> MockServer {
        MockServer::new()
    }
}
