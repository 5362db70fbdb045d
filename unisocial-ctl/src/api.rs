use anyhow::Context;
use reqwest::Method;
use unisocial_api::{
    Analytics, AuthToken, ChatRoom, Club, ClubId, ClubMembership, CommentRecord, Credentials,
    Error, Event, EventId, LikeStatus, MembershipId, MembershipState, Message, NewAccount,
    NewClub, NewComment, NewEvent, NewMessage, NewPost, Post, PostId, ProfilePatch, RoomId,
    Session, TrendingPost, User, UserId, UserTrend,
};

/// Typed wrapper over the backend's REST surface. Paths and verbs are the
/// ones the web frontend uses.
pub struct ApiClient {
    host: String,
    token: Option<AuthToken>,
    client: reqwest::Client,
}

#[derive(Debug, serde::Deserialize)]
pub struct TrendingPosts {
    pub count: u64,
    pub posts: Vec<TrendingPost>,
}

#[derive(Debug, serde::Deserialize)]
pub struct UserTrends {
    pub total: u64,
    pub trends: Vec<UserTrend>,
}

impl ApiClient {
    pub fn new(host: String, token: Option<AuthToken>) -> ApiClient {
        ApiClient {
            host,
            token,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let req = self
            .client
            .request(method, format!("{}{}", self.host, path));
        match &self.token {
            Some(tok) => req.bearer_auth(&tok.0),
            None => req,
        }
    }

    async fn run<R>(req: reqwest::RequestBuilder) -> anyhow::Result<R>
    where
        R: for<'de> serde::Deserialize<'de>,
    {
        let body = Self::run_raw(req).await?;
        serde_json::from_slice(&body).context("parsing response body")
    }

    /// For endpoints that answer with an empty body.
    async fn run_empty(req: reqwest::RequestBuilder) -> anyhow::Result<()> {
        Self::run_raw(req).await.map(|_| ())
    }

    async fn run_raw(req: reqwest::RequestBuilder) -> anyhow::Result<Vec<u8>> {
        let resp = req.send().await.context("sending request")?;
        let status = resp.status();
        let body = resp.bytes().await.context("reading response body")?;
        if !status.is_success() {
            // Backend errors carry a typed JSON body; anything else (a proxy
            // page, say) degrades to the bare status code.
            return Err(match Error::parse(&body) {
                Ok(e) => anyhow::Error::new(e),
                Err(_) => anyhow::anyhow!("request failed with status {status}"),
            });
        }
        Ok(body.to_vec())
    }

    pub async fn register(&self, a: &NewAccount) -> anyhow::Result<Session> {
        Self::run(self.request(Method::POST, "/api/auth/register").json(a)).await
    }

    pub async fn login(&self, c: &Credentials) -> anyhow::Result<Session> {
        Self::run(self.request(Method::POST, "/api/auth/login").json(c)).await
    }

    pub async fn whoami(&self) -> anyhow::Result<User> {
        Self::run(self.request(Method::GET, "/api/users/me")).await
    }

    pub async fn update_profile(&self, p: &ProfilePatch) -> anyhow::Result<User> {
        Self::run(self.request(Method::PUT, "/api/users/me").json(p)).await
    }

    pub async fn feed(&self) -> anyhow::Result<Vec<Post>> {
        Self::run(self.request(Method::GET, "/api/posts/feed")).await
    }

    pub async fn create_post(&self, p: &NewPost) -> anyhow::Result<Post> {
        Self::run(self.request(Method::POST, "/api/posts").json(p)).await
    }

    pub async fn delete_post(&self, post: PostId) -> anyhow::Result<()> {
        Self::run_empty(self.request(Method::DELETE, &format!("/api/posts/{}", post.0))).await
    }

    pub async fn like(&self, post: PostId) -> anyhow::Result<LikeStatus> {
        Self::run(self.request(Method::POST, &format!("/api/posts/{}/like", post.0))).await
    }

    pub async fn unlike(&self, post: PostId) -> anyhow::Result<LikeStatus> {
        Self::run(self.request(Method::DELETE, &format!("/api/posts/{}/like", post.0))).await
    }

    pub async fn post_comments(&self, post: PostId) -> anyhow::Result<Vec<CommentRecord>> {
        Self::run(self.request(Method::GET, &format!("/api/posts/{}/comments", post.0))).await
    }

    pub async fn add_comment(
        &self,
        post: PostId,
        c: &NewComment,
    ) -> anyhow::Result<CommentRecord> {
        Self::run(
            self.request(Method::POST, &format!("/api/posts/{}/comments", post.0))
                .json(c),
        )
        .await
    }

    pub async fn clubs(&self) -> anyhow::Result<Vec<Club>> {
        Self::run(self.request(Method::GET, "/api/clubs")).await
    }

    pub async fn create_club(&self, c: &NewClub) -> anyhow::Result<Club> {
        Self::run(self.request(Method::POST, "/api/clubs").json(c)).await
    }

    pub async fn join_club(&self, club: ClubId) -> anyhow::Result<()> {
        Self::run_empty(self.request(Method::POST, &format!("/api/clubs/{}/join", club.0))).await
    }

    pub async fn membership_status(&self, club: ClubId) -> anyhow::Result<MembershipState> {
        Self::run(self.request(
            Method::GET,
            &format!("/api/clubs/{}/membership-status", club.0),
        ))
        .await
    }

    pub async fn club_members(&self, club: ClubId) -> anyhow::Result<Vec<ClubMembership>> {
        Self::run(self.request(
            Method::GET,
            &format!("/api/clubs/memberships/club/{}/members", club.0),
        ))
        .await
    }

    pub async fn pending_memberships(&self, club: ClubId) -> anyhow::Result<Vec<ClubMembership>> {
        Self::run(self.request(
            Method::GET,
            &format!("/api/clubs/memberships/club/{}/pending", club.0),
        ))
        .await
    }

    pub async fn approve_membership(&self, m: MembershipId) -> anyhow::Result<()> {
        Self::run_empty(self.request(
            Method::PUT,
            &format!("/api/clubs/memberships/{}/approve", m.0),
        ))
        .await
    }

    pub async fn reject_membership(&self, m: MembershipId) -> anyhow::Result<()> {
        Self::run_empty(self.request(
            Method::PUT,
            &format!("/api/clubs/memberships/{}/reject", m.0),
        ))
        .await
    }

    pub async fn upcoming_events(&self) -> anyhow::Result<Vec<Event>> {
        Self::run(self.request(Method::GET, "/api/events/upcoming")).await
    }

    pub async fn create_event(&self, club: ClubId, e: &NewEvent) -> anyhow::Result<Event> {
        Self::run(
            self.request(Method::POST, &format!("/api/clubs/{}/events", club.0))
                .json(e),
        )
        .await
    }

    pub async fn delete_event(&self, event: EventId) -> anyhow::Result<()> {
        Self::run_empty(self.request(Method::DELETE, &format!("/api/events/{}", event.0))).await
    }

    pub async fn rooms(&self) -> anyhow::Result<Vec<ChatRoom>> {
        Self::run(self.request(Method::GET, "/api/chat/rooms")).await
    }

    pub async fn messages(&self, room: RoomId) -> anyhow::Result<Vec<Message>> {
        Self::run(self.request(Method::GET, &format!("/api/chat/{}/messages", room.0))).await
    }

    pub async fn send_message(&self, room: RoomId, m: &NewMessage) -> anyhow::Result<Message> {
        Self::run(
            self.request(Method::POST, &format!("/api/chat/{}/message", room.0))
                .json(m),
        )
        .await
    }

    pub async fn start_private_chat(&self, user: UserId) -> anyhow::Result<ChatRoom> {
        Self::run(self.request(Method::POST, &format!("/api/chat/private/{}", user.0))).await
    }

    pub async fn start_group_chat(&self, club: ClubId) -> anyhow::Result<ChatRoom> {
        Self::run(self.request(Method::POST, &format!("/api/chat/group/{}", club.0))).await
    }

    pub async fn verify_club(&self, club: ClubId) -> anyhow::Result<()> {
        Self::run_empty(self.request(Method::PUT, &format!("/api/clubs/{}/verify", club.0))).await
    }

    pub async fn delete_user(&self, user: UserId) -> anyhow::Result<()> {
        Self::run_empty(self.request(Method::DELETE, &format!("/api/admin/users/{}", user.0)))
            .await
    }

    pub async fn analytics(&self) -> anyhow::Result<Analytics> {
        Self::run(self.request(Method::GET, "/api/admin/analytics")).await
    }

    pub async fn trending_posts(&self) -> anyhow::Result<TrendingPosts> {
        Self::run(self.request(Method::GET, "/api/analytics/posts/trending")).await
    }

    pub async fn user_trends(&self) -> anyhow::Result<UserTrends> {
        Self::run(self.request(Method::GET, "/api/analytics/users/trends")).await
    }
}
