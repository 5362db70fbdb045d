use unisocial_api::{
    Credentials, Error, MembershipStatus, NewAccount, NewClub, NewComment, NewMessage, NewPost,
    UserId,
};
use unisocial_client::ClientDb;
use unisocial_mock_server::MockServer;

fn account(n: usize) -> NewAccount {
    NewAccount {
        reg_no: format!("21BCE{n:04}"),
        email: format!("student{n}@campus.ac.in"),
        password: String::from("hunter2"),
        name: format!("Student {n}"),
    }
}

#[test]
fn login_roundtrips_registration() {
    let mut server = MockServer::new();
    server.register(account(1)).unwrap();
    assert_eq!(server.test_num_accounts(), 1);

    let (email, password) = server.test_get_account(0);
    let creds = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let session = server.login(creds.clone()).unwrap();
    assert_eq!(server.whoami(&session.token).unwrap().email, creds.email);

    let wrong = Credentials {
        password: String::from("not-hunter2"),
        ..creds
    };
    assert!(matches!(server.login(wrong), Err(Error::InvalidCredentials)));
}

#[test]
fn duplicate_registration_conflicts() {
    let mut server = MockServer::new();
    server.register(account(1)).unwrap();

    let same_email = NewAccount {
        reg_no: String::from("21BCE9999"),
        ..account(1)
    };
    assert!(matches!(
        server.register(same_email),
        Err(Error::EmailAlreadyUsed(_))
    ));

    let same_regno = NewAccount {
        email: String::from("other@campus.ac.in"),
        ..account(1)
    };
    assert!(matches!(
        server.register(same_regno),
        Err(Error::RegNoAlreadyUsed(_))
    ));
}

#[test]
fn membership_approval_gates_group_chat() {
    let mut server = MockServer::new();
    let alice = server.register(account(1)).unwrap();
    let bob = server.register(account(2)).unwrap();

    let club = server
        .create_club(
            &alice.token,
            NewClub {
                name: String::from("Chess Club"),
                description: Some(String::from("weekly blitz")),
                logo_url: None,
            },
        )
        .unwrap();

    // The founder is already in; bob has to be approved first.
    server.join_club(&bob.token, club.id).unwrap();
    let state = server.membership_status(&bob.token, club.id).unwrap();
    assert!(!state.is_member);
    assert_eq!(state.status, Some(MembershipStatus::Pending));

    assert_eq!(
        server.start_group_chat(&bob.token, club.id),
        Err(Error::PermissionDenied)
    );

    let pending = server.pending_memberships(&alice.token, club.id).unwrap();
    assert_eq!(pending.len(), 1);
    server
        .approve_membership(&alice.token, pending[0].id)
        .unwrap();

    let state = server.membership_status(&bob.token, club.id).unwrap();
    assert!(state.is_member);

    let room = server.start_group_chat(&bob.token, club.id).unwrap();
    server
        .send_message(
            &bob.token,
            room.id,
            NewMessage {
                content: String::from("thanks for letting me in"),
            },
        )
        .unwrap();
    let seen = server.messages(&alice.token, room.id).unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].sender_id, bob.user.id);
}

#[test]
fn private_chat_poll_replaces_the_message_list() {
    let mut server = MockServer::new();
    let alice = server.register(account(1)).unwrap();
    let bob = server.register(account(2)).unwrap();

    let room = server
        .start_private_chat(&alice.token, bob.user.id)
        .unwrap();
    // Asking again finds the same conversation.
    let again = server
        .start_private_chat(&bob.token, alice.user.id)
        .unwrap();
    assert_eq!(room.id, again.id);

    let mut db = ClientDb::stub();
    db.me = bob.user.id;

    server
        .send_message(&alice.token, room.id, NewMessage { content: String::from("hi") })
        .unwrap();
    db.set_rooms(server.rooms(&bob.token).unwrap());
    db.set_messages(room.id, server.messages(&bob.token, room.id).unwrap());
    assert_eq!(db.room_messages(room.id).unwrap().len(), 1);

    server
        .send_message(&bob.token, room.id, NewMessage { content: String::from("yo") })
        .unwrap();
    // Next tick; the fetched list replaces the old one wholesale.
    db.set_messages(room.id, server.messages(&bob.token, room.id).unwrap());
    let msgs = db.room_messages(room.id).unwrap();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].content, "hi");
    assert_eq!(msgs[1].content, "yo");
}

#[test]
fn moderation_console_sees_the_whole_campus() {
    let mut server = MockServer::new();
    let admin = server
        .admin_create_account(NewAccount {
            reg_no: String::from("STAFF0001"),
            email: String::from("admin@campus.ac.in"),
            password: String::from("hunter2"),
            name: String::from("The Admin"),
        })
        .unwrap();
    let alice = server.register(account(1)).unwrap();

    let club = server
        .create_club(
            &alice.token,
            NewClub {
                name: String::from("Robotics"),
                description: None,
                logo_url: None,
            },
        )
        .unwrap();
    assert!(!club.is_verified());

    let p = server
        .create_post(
            &alice.token,
            NewPost {
                content_text: String::from("we built a rover"),
                media_url: None,
                media_type: None,
            },
        )
        .unwrap();
    server.like(&admin.token, p.id).unwrap();
    server
        .add_comment(
            &admin.token,
            p.id,
            NewComment {
                content: String::from("impressive"),
                parent_id: None,
            },
        )
        .unwrap();

    // Verification is admin-only.
    assert_eq!(
        server.verify_club(&alice.token, club.id),
        Err(Error::PermissionDenied)
    );
    server.verify_club(&admin.token, club.id).unwrap();
    let clubs = server.clubs(&alice.token).unwrap();
    assert!(clubs.iter().find(|c| c.id == club.id).unwrap().is_verified());

    let analytics = server.analytics(&admin.token).unwrap();
    assert_eq!(analytics.total_users, 2);
    assert_eq!(analytics.total_clubs, 1);
    assert_eq!(analytics.verified_clubs, 1);
    assert_eq!(analytics.total_posts, 1);
    assert_eq!(analytics.total_comments, 1);
    assert_eq!(analytics.total_likes, 1);

    assert_eq!(
        server.analytics(&alice.token),
        Err(Error::PermissionDenied)
    );

    // Removing a user also revokes their sessions.
    server.delete_user(&admin.token, alice.user.id).unwrap();
    assert_eq!(server.whoami(&alice.token), Err(Error::PermissionDenied));
    assert_eq!(
        server.delete_user(&admin.token, UserId(999)),
        Err(Error::NotFound(String::from("user 999")))
    );
}
