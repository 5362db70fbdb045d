use std::collections::{HashMap, HashSet};

use anyhow::Context;
use unisocial_api::{
    AuthToken, ClubId, CommentId, Credentials, EventId, MembershipId, MessageId, NewAccount,
    NewClub, NewComment, NewEvent, NewMessage, NewPost, PostId, ProfilePatch, RoomId, Time,
    UserId,
};
use unisocial_client::{build_forest, insert_comment, CommentNode};

mod api;
use api::ApiClient;

// The web frontend refreshes an open conversation every 2 seconds and the
// room list every 5; `watch` keeps the same cadence.
const MESSAGE_POLL_SECS: u64 = 2;
const ROOM_POLL_SECS: u64 = 5;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Backend base URL, e.g. http://localhost:8080
    #[structopt(short, long)]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Create an account and print its auth token
    Register {
        /// Registration number
        reg_no: String,

        email: String,
        password: String,

        /// Display name
        name: String,
    },

    /// Log in and print an auth token for UNISOCIAL_TOKEN
    Login { email: String, password: String },

    /// Show the logged-in user
    Whoami,

    /// Update profile fields; absent flags are left unchanged
    UpdateProfile {
        #[structopt(long)]
        name: Option<String>,
        #[structopt(long)]
        bio: Option<String>,
        #[structopt(long)]
        dp_url: Option<String>,
    },

    /// Print the post feed, newest first
    Feed,

    /// Publish a post
    CreatePost {
        content: String,
        #[structopt(long)]
        media_url: Option<String>,
    },

    /// Delete a post (author or admin)
    DeletePost { post: i64 },

    Like { post: i64 },
    Unlike { post: i64 },

    /// Print a post's comment thread
    Comments { post: i64 },

    /// Comment on a post, optionally as a reply to another comment
    Comment {
        post: i64,
        content: String,
        #[structopt(long)]
        reply_to: Option<i64>,
    },

    /// List clubs
    Clubs,

    /// Create a club; the creator becomes its first admin
    CreateClub {
        name: String,
        #[structopt(long)]
        description: Option<String>,
    },

    /// Request membership in a club
    JoinClub { club: i64 },

    /// List a club's approved members
    ClubMembers { club: i64 },

    /// List membership requests awaiting review (club admins)
    PendingMemberships { club: i64 },

    ApproveMembership { membership: i64 },
    RejectMembership { membership: i64 },

    /// Print upcoming events
    Events,

    /// Schedule a club event (club admins); times are RFC 3339
    CreateEvent {
        club: i64,
        title: String,
        location: String,
        #[structopt(parse(try_from_str = parse_time))]
        start: Time,
        #[structopt(parse(try_from_str = parse_time))]
        end: Time,
        #[structopt(long, default_value = "")]
        description: String,
        /// Grant on-duty leave to attendees
        #[structopt(long)]
        od_provided: bool,
    },

    DeleteEvent { event: i64 },

    /// List chat rooms you can see
    Rooms,

    /// Open (or find) a private conversation with a user
    Chat { user: i64 },

    /// Open (or find) a club's group chat
    GroupChat { club: i64 },

    /// Send a message to a room
    Send { room: i64, content: String },

    /// Follow a room's messages (or, with no room, all room previews),
    /// polling until Ctrl-C
    Watch { room: Option<i64> },

    /// Moderation console
    Admin(AdminCommand),
}

#[derive(structopt::StructOpt)]
enum AdminCommand {
    /// Print dashboard totals
    Analytics,
    /// Print posts ranked by engagement
    Trending,
    /// Print daily signup counts
    UserTrends,
    /// Mark a club as verified
    VerifyClub { club: i64 },
    /// Remove a user account
    DeleteUser { user: i64 },
}

fn token() -> anyhow::Result<AuthToken> {
    Ok(AuthToken(
        std::env::var("UNISOCIAL_TOKEN")
            .context("retrieving UNISOCIAL_TOKEN environment variable")?,
    ))
}

fn parse_time(s: &str) -> anyhow::Result<Time> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("parsing {s:?} as an RFC 3339 time"))?
        .with_timezone(&chrono::Utc))
}

fn print_thread(nodes: &[CommentNode], depth: usize) {
    for n in nodes {
        println!(
            "{:indent$}#{} {} ({}): {}",
            "",
            n.record.id.0,
            n.record.author_name,
            n.record.created_at.format("%Y-%m-%d %H:%M"),
            n.record.content,
            indent = depth * 2,
        );
        print_thread(&n.replies, depth + 1);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let tok = match &opt.cmd {
        Command::Register { .. } | Command::Login { .. } => None,
        _ => Some(token()?),
    };
    let client = ApiClient::new(opt.host, tok);

    match opt.cmd {
        Command::Register {
            reg_no,
            email,
            password,
            name,
        } => {
            let session = client
                .register(&NewAccount {
                    reg_no,
                    email,
                    password,
                    name,
                })
                .await?;
            println!("{}", session.token.0);
        }
        Command::Login { email, password } => {
            let session = client.login(&Credentials { email, password }).await?;
            println!("{}", session.token.0);
        }
        Command::Whoami => {
            let user = client.whoami().await?;
            println!("#{} {} <{}> ({:?})", user.id.0, user.name, user.email, user.role);
        }
        Command::UpdateProfile { name, bio, dp_url } => {
            let user = client
                .update_profile(&ProfilePatch { name, bio, dp_url })
                .await?;
            println!("updated profile of {}", user.name);
        }
        Command::Feed => {
            for p in client.feed().await? {
                println!(
                    "#{} {} ({} likes, {} comments)\n    {}",
                    p.id.0, p.author_name, p.like_count, p.comment_count, p.content_text,
                );
            }
        }
        Command::CreatePost { content, media_url } => {
            let post = client
                .create_post(&NewPost {
                    content_text: content,
                    media_url,
                    media_type: None,
                })
                .await?;
            println!("created post #{}", post.id.0);
        }
        Command::DeletePost { post } => {
            client.delete_post(PostId(post)).await?;
            println!("deleted post #{post}");
        }
        Command::Like { post } => {
            let status = client.like(PostId(post)).await?;
            println!("post #{post} now has {} likes", status.total_likes);
        }
        Command::Unlike { post } => {
            let status = client.unlike(PostId(post)).await?;
            println!("post #{post} now has {} likes", status.total_likes);
        }
        Command::Comments { post } => {
            let records = client.post_comments(PostId(post)).await?;
            print_thread(&build_forest(records)?, 0);
        }
        Command::Comment {
            post,
            content,
            reply_to,
        } => {
            let post = PostId(post);
            // Fetch before submitting so the new comment can be spliced into
            // the thread we already have, the way the web page patches its
            // state instead of refetching.
            let forest = build_forest(client.post_comments(post).await?)?;
            let record = client
                .add_comment(
                    post,
                    &NewComment {
                        content,
                        parent_id: reply_to.map(CommentId),
                    },
                )
                .await?;
            print_thread(&insert_comment(forest, record), 0);
        }
        Command::Clubs => {
            for c in client.clubs().await? {
                println!(
                    "#{} {}{} ({} members)",
                    c.id.0,
                    c.name,
                    if c.is_verified() { " [verified]" } else { "" },
                    c.member_count.unwrap_or(0),
                );
            }
        }
        Command::CreateClub { name, description } => {
            let club = client
                .create_club(&NewClub {
                    name,
                    description,
                    logo_url: None,
                })
                .await?;
            println!("created club #{}", club.id.0);
        }
        Command::JoinClub { club } => {
            client.join_club(ClubId(club)).await?;
            let state = client.membership_status(ClubId(club)).await?;
            println!("membership status: {:?}", state.status);
        }
        Command::ClubMembers { club } => {
            for m in client.club_members(ClubId(club)).await? {
                println!("#{} {} ({:?})", m.user_id.0, m.user_name, m.role);
            }
        }
        Command::PendingMemberships { club } => {
            for m in client.pending_memberships(ClubId(club)).await? {
                println!("membership #{}: {}", m.id.0, m.user_name);
            }
        }
        Command::ApproveMembership { membership } => {
            client.approve_membership(MembershipId(membership)).await?;
            println!("approved membership #{membership}");
        }
        Command::RejectMembership { membership } => {
            client.reject_membership(MembershipId(membership)).await?;
            println!("rejected membership #{membership}");
        }
        Command::Events => {
            for e in client.upcoming_events().await? {
                println!(
                    "#{} [{}] {} at {} ({})",
                    e.id.0,
                    e.club_name,
                    e.title,
                    e.location,
                    e.start_time.format("%Y-%m-%d %H:%M"),
                );
            }
        }
        Command::CreateEvent {
            club,
            title,
            location,
            start,
            end,
            description,
            od_provided,
        } => {
            let event = client
                .create_event(
                    ClubId(club),
                    &NewEvent {
                        title,
                        description,
                        banner_url: None,
                        location,
                        start_time: start,
                        end_time: end,
                        registration_link: None,
                        registration_deadline: None,
                        od_provided,
                    },
                )
                .await?;
            println!("created event #{}", event.id.0);
        }
        Command::DeleteEvent { event } => {
            client.delete_event(EventId(event)).await?;
            println!("deleted event #{event}");
        }
        Command::Rooms => {
            for r in client.rooms().await? {
                let preview = r
                    .last_message
                    .map(|m| format!("{}: {}", m.sender_name, m.content))
                    .unwrap_or_else(|| String::from("(no messages)"));
                println!("room #{} ({:?}): {}", r.id.0, r.room_type, preview);
            }
        }
        Command::Chat { user } => {
            let room = client.start_private_chat(UserId(user)).await?;
            println!("room #{}", room.id.0);
        }
        Command::GroupChat { club } => {
            let room = client.start_group_chat(ClubId(club)).await?;
            println!("room #{}", room.id.0);
        }
        Command::Send { room, content } => {
            let msg = client
                .send_message(RoomId(room), &NewMessage { content })
                .await?;
            println!("sent message #{}", msg.id.0);
        }
        Command::Watch { room } => match room {
            Some(room) => watch_messages(&client, RoomId(room)).await?,
            None => watch_rooms(&client).await?,
        },
        Command::Admin(cmd) => match cmd {
            AdminCommand::Analytics => {
                let a = client.analytics().await?;
                println!("users:          {}", a.total_users);
                println!("active users:   {}", a.active_users);
                println!("clubs:          {} ({} verified)", a.total_clubs, a.verified_clubs);
                println!("posts:          {}", a.total_posts);
                println!("comments:       {}", a.total_comments);
                println!("likes:          {}", a.total_likes);
                println!("events:         {}", a.total_events);
            }
            AdminCommand::Trending => {
                for p in client.trending_posts().await?.posts {
                    println!(
                        "#{} {} (engagement {}): {}",
                        p.post_id.0, p.author_name, p.total_engagement, p.content_text,
                    );
                }
            }
            AdminCommand::UserTrends => {
                for t in client.user_trends().await?.trends {
                    println!("{}: {}", t.date, t.count);
                }
            }
            AdminCommand::VerifyClub { club } => {
                client.verify_club(ClubId(club)).await?;
                println!("verified club #{club}");
            }
            AdminCommand::DeleteUser { user } => {
                client.delete_user(UserId(user)).await?;
                println!("deleted user #{user}");
            }
        },
    }

    Ok(())
}

async fn watch_messages(client: &ApiClient, room: RoomId) -> anyhow::Result<()> {
    let mut seen: HashSet<MessageId> = HashSet::new();
    let mut tick =
        tokio::time::interval(std::time::Duration::from_secs(MESSAGE_POLL_SECS));
    loop {
        tokio::select! {
            _ = tick.tick() => {
                // Each tick replaces the whole list; anything not yet seen
                // gets printed in order.
                for m in client.messages(room).await? {
                    if seen.insert(m.id) {
                        println!(
                            "[{}] {}: {}",
                            m.sent_at.format("%H:%M:%S"),
                            m.sender_name,
                            m.content,
                        );
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

async fn watch_rooms(client: &ApiClient) -> anyhow::Result<()> {
    let mut previews: HashMap<RoomId, MessageId> = HashMap::new();
    let mut tick = tokio::time::interval(std::time::Duration::from_secs(ROOM_POLL_SECS));
    loop {
        tokio::select! {
            _ = tick.tick() => {
                for r in client.rooms().await? {
                    if let Some(m) = r.last_message {
                        if previews.insert(r.id, m.id) != Some(m.id) {
                            println!("room #{}: {}: {}", r.id.0, m.sender_name, m.content);
                        }
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}
