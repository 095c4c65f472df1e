use super::*;

fn heredoc(marker: &str) -> Heredoc {
    Heredoc {
        marker: Arc::from(marker),
        indented: false,
        interpolate: true,
    }
}

#[test]
fn new_stack_is_bottom_code_frame() {
    let stack = ModeStack::new();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.mode(), &Mode::Code);
    assert!(stack.is_trivial(0x20));
}

#[test]
fn bottom_frame_is_never_popped() {
    let mut stack = ModeStack::new();
    stack.pop();
    stack.pop();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.mode(), &Mode::Code);
}

#[test]
fn push_and_pop() {
    let mut stack = ModeStack::new();
    stack.push(Mode::DoubleQuoted);
    stack.push(Mode::Code);
    assert_eq!(stack.depth(), 3);
    stack.pop();
    assert_eq!(stack.mode(), &Mode::DoubleQuoted);
    assert!(!stack.is_trivial(0x20));
}

#[test]
fn unbalanced_rbrace_closes_pushed_frame() {
    let mut stack = ModeStack::new();
    stack.push(Mode::DoubleQuoted);
    stack.push(Mode::Code);
    stack.lbrace();
    assert!(!stack.rbrace());
    assert_eq!(stack.depth(), 3);
    assert!(stack.rbrace());
    assert_eq!(stack.mode(), &Mode::DoubleQuoted);
}

#[test]
fn unbalanced_rbrace_at_bottom_saturates() {
    let mut stack = ModeStack::new();
    assert!(!stack.rbrace());
    assert_eq!(stack.top().brace_depth, 0);
    stack.lbrace();
    assert_eq!(stack.top().brace_depth, 1);
}

#[test]
fn heredocs_drain_in_fifo_order() {
    let mut stack = ModeStack::new();
    stack.queue_heredoc(heredoc("A"));
    stack.queue_heredoc(heredoc("B"));
    assert!(stack.has_pending_heredoc());
    assert!(!stack.is_trivial(0x20));
    assert_eq!(stack.take_heredoc().map(|h| h.marker), Some(Arc::from("A")));
    assert_eq!(stack.take_heredoc().map(|h| h.marker), Some(Arc::from("B")));
    assert_eq!(stack.take_heredoc(), None);
}

#[test]
fn heredoc_queue_belongs_to_its_frame() {
    let mut stack = ModeStack::new();
    stack.push(Mode::Code);
    stack.queue_heredoc(heredoc("X"));
    stack.pop();
    assert!(!stack.has_pending_heredoc());
}

#[test]
fn closing_interpolation_drops_its_heredocs() {
    let mut stack = ModeStack::new();
    stack.push(Mode::DoubleQuoted);
    stack.push(Mode::Code);
    stack.queue_heredoc(heredoc("A"));
    assert!(stack.rbrace());
    assert_eq!(stack.mode(), &Mode::DoubleQuoted);
    assert!(!stack.has_pending_heredoc());
}

#[test]
fn one_shot_frame_is_removed_by_index() {
    let mut stack = ModeStack::new();
    stack.push(Mode::DoubleQuoted);
    stack.push(Mode::CodeOnce);
    stack.finish_one_shot(2);
    assert_eq!(stack.mode(), &Mode::DoubleQuoted);
    // A second finish at the same index is a no-op.
    stack.finish_one_shot(2);
    assert_eq!(stack.depth(), 2);
}

#[test]
fn compact_depth_limit() {
    let stack = ModeStack::with_brace_depth(0x1F);
    assert!(stack.is_trivial(0x20));
    let stack = ModeStack::with_brace_depth(0x20);
    assert!(!stack.is_trivial(0x20));
}
