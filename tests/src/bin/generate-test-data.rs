use rand::Rng;

const NUM_USERS: usize = 20;

const NUM_CLUBS: usize = 5;
const NUM_MEMBERSHIPS: usize = 40;

const NUM_POSTS: usize = 60;
const NUM_COMMENTS: usize = 200;
const NUM_EVENTS: usize = 10;

const REPLY_PROBABILITY: f64 = 0.3;
const POST_WORD_COUNT: usize = 20;
const COMMENT_WORD_COUNT: usize = 12;

fn gen_n_items(table: &str, n: usize, mut f: impl FnMut(usize) -> String) {
    println!("INSERT INTO {} VALUES", table);
    for i in 0..n {
        if i != 0 {
            println!(",");
        }
        print!("    {}", f(i));
    }
    println!();
    println!("ON CONFLICT DO NOTHING;");
}

fn main() {
    let mut rng = rand::thread_rng();

    gen_n_items("users", NUM_USERS, |i| {
        let n = i + 1;
        format!(
            "({n}, '21BCE{n:04}', 'student{n}@campus.ac.in', \
             '$2b$04$placeholderplaceholderplace', 'Student {n}', 'USER', now())",
        )
    });

    gen_n_items("clubs", NUM_CLUBS, |i| {
        let n = i + 1;
        // creator is user n, matching the admin membership generated below
        format!(
            "({n}, 'Club {n}', '{}', NULL, {n}, now())",
            lipsum::lipsum(POST_WORD_COUNT),
        )
    });

    // The first membership of each club is its creator as approved admin;
    // the rest are ordinary requests in a random review state.
    gen_n_items("club_memberships", NUM_MEMBERSHIPS, |i| {
        let user = i % NUM_USERS + 1;
        let club = (i / NUM_USERS) % NUM_CLUBS + 1;
        let (status, role) = match user == club {
            true => ("APPROVED", "ADMIN"),
            false => (
                ["PENDING", "APPROVED", "REJECTED"][rng.gen_range(0..3)],
                "MEMBER",
            ),
        };
        format!("({}, {club}, {user}, '{status}', '{role}', now())", i + 1)
    });

    gen_n_items("posts", NUM_POSTS, |i| {
        format!(
            "({}, {}, '{}', 'TEXT', now() + interval '{i} seconds')",
            i + 1,
            i % NUM_USERS + 1,
            lipsum::lipsum(POST_WORD_COUNT),
        )
    });

    // Comments are spread round-robin over the posts; a reply points at the
    // previous comment on the same post, so every parent resolves and
    // created_at order is also id order.
    gen_n_items("comments", NUM_COMMENTS, |i| {
        let post = i % NUM_POSTS + 1;
        let parent = match i >= NUM_POSTS && rng.gen_bool(REPLY_PROBABILITY) {
            true => format!("{}", i + 1 - NUM_POSTS),
            false => String::from("NULL"),
        };
        format!(
            "({}, {post}, {}, '{}', {parent}, now() + interval '{i} seconds')",
            i + 1,
            rng.gen_range(1..=NUM_USERS),
            lipsum::lipsum(COMMENT_WORD_COUNT),
        )
    });

    gen_n_items("events", NUM_EVENTS, |i| {
        format!(
            "({}, {}, 'Event {}', '{}', 'Main auditorium', \
             now() + interval '{} days', now() + interval '{} days 2 hours', {}, now())",
            i + 1,
            i % NUM_CLUBS + 1,
            i + 1,
            lipsum::lipsum(POST_WORD_COUNT),
            i + 1,
            i + 1,
            rng.gen_bool(0.5),
        )
    });
}
