use unisocial_api::{CommentId, CommentRecord, Error, NewAccount, NewComment, NewPost, PostId};
use unisocial_client::{build_forest, ClientDb, CommentNode};
use unisocial_mock_server::MockServer;

fn account(n: usize) -> NewAccount {
    NewAccount {
        reg_no: format!("21BCE{n:04}"),
        email: format!("student{n}@campus.ac.in"),
        password: String::from("hunter2"),
        name: format!("Student {n}"),
    }
}

fn post(text: &str) -> NewPost {
    NewPost {
        content_text: text.to_string(),
        media_url: None,
        media_type: None,
    }
}

fn comment(text: &str, parent: Option<CommentId>) -> NewComment {
    NewComment {
        content: text.to_string(),
        parent_id: parent,
    }
}

#[test]
fn incremental_patch_matches_full_rebuild() {
    let mut server = MockServer::new();
    let alice = server.register(account(1)).unwrap();
    let bob = server.register(account(2)).unwrap();

    let p = server
        .create_post(&alice.token, post("hello campus"))
        .unwrap();

    let mut db = ClientDb::stub();
    db.me = alice.user.id;
    db.set_feed(server.feed(&alice.token).unwrap());
    db.set_thread(p.id, server.post_comments(&alice.token, p.id).unwrap())
        .unwrap();

    // Both users comment; every submission is patched into the local thread
    // the way the comment modal does it, without refetching.
    let c1 = server
        .add_comment(&bob.token, p.id, comment("first!", None))
        .unwrap();
    db.add_comment(p.id, c1.clone());
    let c2 = server
        .add_comment(&alice.token, p.id, comment("thanks", Some(c1.id)))
        .unwrap();
    db.add_comment(p.id, c2.clone());
    let c3 = server
        .add_comment(&bob.token, p.id, comment("welcome", Some(c2.id)))
        .unwrap();
    db.add_comment(p.id, c3);
    let c4 = server
        .add_comment(&alice.token, p.id, comment("also, second root", None))
        .unwrap();
    db.add_comment(p.id, c4.clone());

    // A poll tick rebuilds the thread from the flat list. Nesting must come
    // out identical; only the root order differs (local inserts put the
    // newest root first, the backend lists oldest first).
    let rebuilt = build_forest(server.post_comments(&alice.token, p.id).unwrap()).unwrap();
    let patched = db.thread(p.id).unwrap().roots.clone();

    assert_eq!(patched[0].record.id, c4.id);
    assert_eq!(rebuilt[0].record.id, c1.id);

    let sorted = |mut nodes: Vec<CommentNode>| {
        nodes.sort_by_key(|n| n.record.id);
        nodes
    };
    assert_eq!(sorted(rebuilt.clone()), sorted(patched));

    assert_eq!(CommentNode::count(&rebuilt), 4);
    assert_eq!(db.post(p.id).unwrap().comment_count, 4);

    // And a second tick with the same data changes nothing.
    db.set_thread(p.id, server.post_comments(&alice.token, p.id).unwrap())
        .unwrap();
    let again = db.thread(p.id).unwrap().roots.clone();
    assert_eq!(again, rebuilt);
}

#[test]
fn backend_rejects_replies_to_unknown_parents() {
    let mut server = MockServer::new();
    let alice = server.register(account(1)).unwrap();
    let p = server
        .create_post(&alice.token, post("no comments yet"))
        .unwrap();

    let res = server.add_comment(&alice.token, p.id, comment("into the void", Some(CommentId(999))));
    assert!(matches!(res, Err(Error::NotFound(_))));

    // A reply to a comment on a different post is just as dangling.
    let other = server.create_post(&alice.token, post("other post")).unwrap();
    let root = server
        .add_comment(&alice.token, other.id, comment("root elsewhere", None))
        .unwrap();
    let res = server.add_comment(&alice.token, p.id, comment("wrong thread", Some(root.id)));
    assert!(matches!(res, Err(Error::NotFound(_))));
}

#[test]
fn comment_counts_follow_the_thread() {
    let mut server = MockServer::new();
    let alice = server.register(account(1)).unwrap();
    let p = server.create_post(&alice.token, post("counting")).unwrap();

    let c1 = server
        .add_comment(&alice.token, p.id, comment("one", None))
        .unwrap();
    server
        .add_comment(&alice.token, p.id, comment("two", Some(c1.id)))
        .unwrap();

    let feed = server.feed(&alice.token).unwrap();
    assert_eq!(feed[0].comment_count, 2);
}

#[test]
fn wire_records_build_the_expected_thread() {
    // Thread reconstruction straight from the JSON the backend sends.
    let records: Vec<CommentRecord> = serde_json::from_value(serde_json::json!([
        {
            "commentId": 1, "postId": 7, "authorId": 10, "authorName": "Asha",
            "content": "A", "createdAt": "2025-09-01T12:00:00Z",
            "parentCommentId": null
        },
        {
            "commentId": 2, "postId": 7, "authorId": 11, "authorName": "Dev",
            "authorDpUrl": "https://cdn.example/dev.png",
            "content": "B", "createdAt": "2025-09-01T12:01:00Z",
            "parentCommentId": 1
        },
        {
            "commentId": 3, "postId": 7, "authorId": 10, "authorName": "Asha",
            "content": "C", "createdAt": "2025-09-01T12:02:00Z",
            "parentCommentId": null
        },
        {
            "commentId": 4, "postId": 7, "authorId": 12, "authorName": "Mira",
            "content": "D", "createdAt": "2025-09-01T12:03:00Z",
            "parentCommentId": 2
        }
    ]))
    .expect("deserializing comment fixture");

    let forest = build_forest(records).unwrap();
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].record.content, "A");
    assert_eq!(forest[0].replies[0].record.content, "B");
    assert_eq!(forest[0].replies[0].replies[0].record.content, "D");
    assert_eq!(forest[1].record.content, "C");

    let post_id = forest[0].record.post_id;
    assert_eq!(post_id, PostId(7));
}
