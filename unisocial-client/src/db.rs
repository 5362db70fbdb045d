use std::{collections::HashMap, sync::Arc};

use crate::{
    api::{
        ChatRoom, CommentRecord, LikeStatus, Message, Post, PostId, RoomId, User, UserId,
    },
    comment::{CommentThread, ThreadError},
};

/// Client-side mirror of the slice of backend state this session has
/// fetched. Cloning is cheap, so a renderer can hold the previous snapshot
/// while a new one is being patched; mutators copy-on-write through
/// [`Arc::make_mut`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientDb {
    pub me: UserId,
    pub users: Arc<HashMap<UserId, User>>,
    pub posts: Arc<HashMap<PostId, Post>>,
    /// Feed order as the backend returned it, newest post first.
    pub feed: Arc<Vec<PostId>>,
    pub threads: Arc<HashMap<PostId, CommentThread>>,
    pub rooms: Arc<HashMap<RoomId, ChatRoom>>,
    pub messages: Arc<HashMap<RoomId, Arc<Vec<Message>>>>,
}

impl ClientDb {
    pub fn stub() -> ClientDb {
        ClientDb {
            me: UserId::stub(),
            users: Arc::new(HashMap::new()),
            posts: Arc::new(HashMap::new()),
            feed: Arc::new(Vec::new()),
            threads: Arc::new(HashMap::new()),
            rooms: Arc::new(HashMap::new()),
            messages: Arc::new(HashMap::new()),
        }
    }

    pub fn add_users(&mut self, users: Vec<User>) {
        Arc::make_mut(&mut self.users).extend(users.into_iter().map(|u| (u.id, u)));
    }

    /// Replace the feed with a fresh fetch, keeping the backend's order.
    pub fn set_feed(&mut self, posts: Vec<Post>) {
        *Arc::make_mut(&mut self.feed) = posts.iter().map(|p| p.id).collect();
        Arc::make_mut(&mut self.posts).extend(posts.into_iter().map(|p| (p.id, p)));
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    pub fn feed_posts(&self) -> impl Iterator<Item = &Post> {
        self.feed.iter().filter_map(|id| self.posts.get(id))
    }

    pub fn thread(&self, post: PostId) -> Option<&CommentThread> {
        self.threads.get(&post)
    }

    /// Rebuild a post's comment thread from a full (re)fetch. Safe to call
    /// on every poll tick; equal input yields an equal thread.
    pub fn set_thread(
        &mut self,
        post: PostId,
        records: Vec<CommentRecord>,
    ) -> Result<(), ThreadError> {
        let thread = CommentThread::from_records(records)?;
        Arc::make_mut(&mut self.threads).insert(post, thread);
        Ok(())
    }

    /// Patch in a comment the backend just accepted, without refetching.
    pub fn add_comment(&mut self, post: PostId, record: CommentRecord) {
        let threads = Arc::make_mut(&mut self.threads);
        let Some(thread) = threads.get_mut(&post) else {
            tracing::warn!(?post, "got comment for a post with no loaded thread");
            return;
        };
        let before = thread.total();
        thread.insert(record);
        match thread.total() > before {
            false => tracing::warn!(?post, "new comment replies to a comment no longer there"),
            true => {
                if let Some(p) = Arc::make_mut(&mut self.posts).get_mut(&post) {
                    p.comment_count += 1;
                }
            }
        }
    }

    pub fn apply_like(&mut self, status: LikeStatus) {
        match Arc::make_mut(&mut self.posts).get_mut(&status.post_id) {
            None => tracing::warn!(post=?status.post_id, "got like status for post not in db"),
            Some(p) => {
                p.like_count = status.total_likes;
                p.liked_by_current_user = Some(status.liked_by_current_user);
            }
        }
    }

    pub fn set_rooms(&mut self, rooms: Vec<ChatRoom>) {
        *Arc::make_mut(&mut self.rooms) = rooms.into_iter().map(|r| (r.id, r)).collect();
    }

    pub fn room_messages(&self, room: RoomId) -> Option<&[Message]> {
        self.messages.get(&room).map(|m| m.as_slice())
    }

    /// Replace a room's message list wholesale, as each poll tick does.
    pub fn set_messages(&mut self, room: RoomId, messages: Vec<Message>) {
        Arc::make_mut(&mut self.messages).insert(room, Arc::new(messages));
    }

    /// Local echo of a message the backend just accepted, so the sender
    /// sees it before the next poll tick.
    pub fn add_message(&mut self, room: RoomId, message: Message) {
        let messages = Arc::make_mut(&mut self.messages);
        let list = messages.entry(room).or_insert_with(|| Arc::new(Vec::new()));
        Arc::make_mut(list).push(message);
    }
}
