mod comment;
pub use comment::{
    build_forest, insert_comment, insert_reply, CommentNode, CommentThread, ThreadError,
};

mod db;
pub use db::ClientDb;

pub mod api {
    pub use unisocial_api::*;
}
