use std::collections::{HashMap, HashSet};

use crate::api::{CommentId, CommentRecord};

/// One comment with its replies resolved, the shape a renderer consumes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub record: CommentRecord,
    /// Replies in chronological order. Always present, empty for a leaf.
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    fn leaf(record: CommentRecord) -> CommentNode {
        CommentNode {
            record,
            replies: Vec::new(),
        }
    }

    pub fn find(nodes: &[CommentNode], id: CommentId) -> Option<&CommentNode> {
        for n in nodes {
            if n.record.id == id {
                return Some(n);
            }
            if let Some(res) = CommentNode::find(&n.replies, id) {
                return Some(res);
            }
        }
        None
    }

    pub fn find_mut(nodes: &mut [CommentNode], id: CommentId) -> Option<&mut CommentNode> {
        for n in nodes {
            if n.record.id == id {
                return Some(n);
            }
            if let Some(res) = CommentNode::find_mut(&mut n.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Number of comments in the forest, roots and replies included.
    pub fn count(nodes: &[CommentNode]) -> usize {
        nodes
            .iter()
            .map(|n| 1 + CommentNode::count(&n.replies))
            .sum()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ThreadError {
    #[error("comment {0:?} is part of a parent-reference loop")]
    CyclicCommentGraph(CommentId),
}

/// Reconstruct the reply forest from the flat list the backend returns.
///
/// Siblings keep the relative order they had in `records`; the list
/// endpoint sends newest-last, so replies read chronologically without any
/// client-side sort. A record whose parent is not in the input is dropped,
/// together with everything beneath it. A set of records whose parent
/// references loop back on themselves is refused rather than recursed into.
pub fn build_forest(records: Vec<CommentRecord>) -> Result<Vec<CommentNode>, ThreadError> {
    // Index records and group children under their parent, both in input
    // order.
    let mut by_id = HashMap::with_capacity(records.len());
    let mut children: HashMap<CommentId, Vec<CommentId>> = HashMap::new();
    let mut roots = Vec::new();
    for r in records {
        match r.parent_id {
            None => roots.push(r.id),
            Some(p) => children.entry(p).or_insert_with(Vec::new).push(r.id),
        }
        by_id.insert(r.id, r);
    }

    // Grow each root's subtree depth-first, moving records out of the index
    // as they attach.
    let mut forest = Vec::with_capacity(roots.len());
    for id in roots {
        if let Some(node) = assemble(id, &mut by_id, &mut children) {
            forest.push(node);
        }
    }

    // Whatever is left never attached: either it sits below an orphan (and
    // stays dropped) or its parent chain loops.
    if let Some(id) = find_cycle(&by_id) {
        return Err(ThreadError::CyclicCommentGraph(id));
    }
    Ok(forest)
}

fn assemble(
    id: CommentId,
    by_id: &mut HashMap<CommentId, CommentRecord>,
    children: &mut HashMap<CommentId, Vec<CommentId>>,
) -> Option<CommentNode> {
    let record = by_id.remove(&id)?;
    let replies = children
        .remove(&id)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| assemble(c, by_id, children))
        .collect();
    Some(CommentNode { record, replies })
}

fn find_cycle(leftover: &HashMap<CommentId, CommentRecord>) -> Option<CommentId> {
    // Walk each leftover record's parent chain; a chain that leaves the
    // leftover set hangs off an orphan, a chain that revisits itself loops.
    let mut cleared = HashSet::new();
    for &start in leftover.keys() {
        let mut path = HashSet::new();
        let mut cur = start;
        while !cleared.contains(&cur) {
            if !path.insert(cur) {
                return Some(cur);
            }
            match leftover.get(&cur).and_then(|r| r.parent_id) {
                Some(p) if leftover.contains_key(&p) => cur = p,
                _ => break,
            }
        }
        cleared.extend(path);
    }
    None
}

/// Splice a freshly submitted comment into an existing forest.
///
/// A new top-level comment goes to the front of the root list (newest root
/// first); a reply goes through [`insert_reply`] and lands at the tail of
/// its parent's replies (newest reply last).
pub fn insert_comment(forest: Vec<CommentNode>, record: CommentRecord) -> Vec<CommentNode> {
    match record.parent_id {
        None => {
            let mut forest = forest;
            forest.insert(0, CommentNode::leaf(record));
            forest
        }
        Some(parent) => insert_reply(forest, parent, record),
    }
}

/// Append `reply` to the replies of `parent_id`, wherever that parent sits
/// in the forest. Nothing else is touched. If the parent is gone (deleted
/// under a concurrent reload, say), the forest comes back unchanged and the
/// reply is discarded; the next full rebuild would drop it anyway.
pub fn insert_reply(
    mut forest: Vec<CommentNode>,
    parent_id: CommentId,
    reply: CommentRecord,
) -> Vec<CommentNode> {
    if let Some(parent) = CommentNode::find_mut(&mut forest, parent_id) {
        parent.replies.push(CommentNode::leaf(reply));
    }
    forest
}

/// The fully reconstructed discussion under one post.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentThread {
    pub roots: Vec<CommentNode>,
}

impl CommentThread {
    pub fn from_records(records: Vec<CommentRecord>) -> Result<CommentThread, ThreadError> {
        Ok(CommentThread {
            roots: build_forest(records)?,
        })
    }

    pub fn insert(&mut self, record: CommentRecord) {
        let roots = std::mem::take(&mut self.roots);
        self.roots = insert_comment(roots, record);
    }

    pub fn find(&self, id: CommentId) -> Option<&CommentNode> {
        CommentNode::find(&self.roots, id)
    }

    pub fn total(&self) -> usize {
        CommentNode::count(&self.roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PostId, UserId};
    use chrono::TimeZone;

    fn rec(id: i64, parent: Option<i64>, content: &str) -> CommentRecord {
        let base = chrono::Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
        CommentRecord {
            id: CommentId(id),
            post_id: PostId(1),
            author_id: UserId(10),
            author_name: String::from("someone"),
            author_dp_url: None,
            content: content.to_string(),
            created_at: base + chrono::Duration::minutes(id),
            parent_id: parent.map(CommentId),
        }
    }

    fn ids(nodes: &[CommentNode]) -> Vec<i64> {
        nodes.iter().map(|n| n.record.id.0).collect()
    }

    #[test]
    fn builds_nested_thread() {
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, None, "C"),
            rec(4, Some(2), "D"),
        ])
        .unwrap();

        assert_eq!(ids(&forest), vec![1, 3]);
        assert_eq!(forest[0].record.content, "A");
        assert_eq!(ids(&forest[0].replies), vec![2]);
        assert_eq!(ids(&forest[0].replies[0].replies), vec![4]);
        assert_eq!(forest[1].record.content, "C");
        assert!(forest[1].replies.is_empty());
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert_eq!(build_forest(vec![]), Ok(vec![]));
    }

    #[test]
    fn root_count_ignores_records_with_dangling_parents() {
        // Two roots; 4 references nothing and must not be promoted to root.
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, None, "C"),
            rec(4, Some(99), "dangling"),
        ])
        .unwrap();
        assert_eq!(ids(&forest), vec![1, 3]);
        assert_eq!(CommentNode::find(&forest, CommentId(4)), None);
    }

    #[test]
    fn orphan_subtree_is_dropped_whole() {
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(99), "orphan"),
            rec(3, Some(2), "below the orphan"),
        ])
        .unwrap();
        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(CommentNode::count(&forest), 1);
    }

    #[test]
    fn conserves_every_node_when_all_parents_resolve() {
        let records = vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, Some(1), "C"),
            rec(4, Some(3), "D"),
            rec(5, None, "E"),
            rec(6, Some(4), "F"),
        ];
        let n = records.len();
        let forest = build_forest(records).unwrap();
        assert_eq!(CommentNode::count(&forest), n);
    }

    #[test]
    fn siblings_keep_input_order() {
        // Replies to 1 are interleaved with other records; their relative
        // order must survive untouched.
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(5, Some(1), "first reply"),
            rec(7, None, "B"),
            rec(3, Some(1), "second reply"),
            rec(2, Some(1), "third reply"),
        ])
        .unwrap();
        assert_eq!(ids(&forest), vec![1, 7]);
        assert_eq!(ids(&forest[0].replies), vec![5, 3, 2]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let records = vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, None, "C"),
            rec(4, Some(2), "D"),
        ];
        assert_eq!(
            build_forest(records.clone()).unwrap(),
            build_forest(records).unwrap()
        );
    }

    #[test]
    fn reply_appends_at_tail_and_touches_nothing_else() {
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, None, "C"),
            rec(4, Some(2), "D"),
        ])
        .unwrap();
        let before = forest.clone();

        let forest = insert_reply(forest, CommentId(2), rec(5, Some(2), "E"));

        let parent = CommentNode::find(&forest, CommentId(2)).unwrap();
        assert_eq!(ids(&parent.replies), vec![4, 5]);
        // The sibling root subtree is untouched.
        assert_eq!(forest[1], before[1]);
        assert_eq!(CommentNode::count(&forest), CommentNode::count(&before) + 1);
    }

    #[test]
    fn new_root_comment_goes_first() {
        let forest = build_forest(vec![rec(1, None, "A"), rec(3, None, "C")]).unwrap();
        let forest = insert_comment(forest, rec(9, None, "newest"));
        assert_eq!(ids(&forest), vec![9, 1, 3]);
        assert!(forest[0].replies.is_empty());
    }

    #[test]
    fn insert_under_unknown_parent_is_a_noop() {
        let forest = build_forest(vec![rec(1, None, "A"), rec(2, Some(1), "B")]).unwrap();
        let before = forest.clone();
        let forest = insert_reply(forest, CommentId(42), rec(5, Some(42), "lost"));
        assert_eq!(forest, before);
    }

    #[test]
    fn deep_chain_inserts_at_any_depth() {
        let forest = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
            rec(3, Some(2), "C"),
            rec(4, Some(3), "D"),
        ])
        .unwrap();
        let forest = insert_reply(forest, CommentId(4), rec(5, Some(4), "E"));
        let deepest = CommentNode::find(&forest, CommentId(4)).unwrap();
        assert_eq!(ids(&deepest.replies), vec![5]);
    }

    #[test]
    fn refuses_parent_reference_loops() {
        let res = build_forest(vec![
            rec(1, None, "A"),
            rec(2, Some(3), "B"),
            rec(3, Some(2), "C"),
        ]);
        assert!(matches!(res, Err(ThreadError::CyclicCommentGraph(_))));
    }

    #[test]
    fn refuses_self_parenting() {
        let res = build_forest(vec![rec(1, Some(1), "me")]);
        assert_eq!(res, Err(ThreadError::CyclicCommentGraph(CommentId(1))));
    }

    #[test]
    fn thread_insert_tracks_total() {
        let mut thread = CommentThread::from_records(vec![
            rec(1, None, "A"),
            rec(2, Some(1), "B"),
        ])
        .unwrap();
        assert_eq!(thread.total(), 2);

        thread.insert(rec(3, Some(2), "C"));
        assert_eq!(thread.total(), 3);
        assert_eq!(ids(&thread.find(CommentId(2)).unwrap().replies), vec![3]);

        // Dangling reply leaves the thread as it was.
        thread.insert(rec(4, Some(99), "lost"));
        assert_eq!(thread.total(), 3);
    }
}
