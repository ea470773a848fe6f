mod common;
use common::*;

#[test]
fn test_while_counts_to_three() {
    let mut r = runtime();
    run(&mut r, &["while < V0 3", "  ++V0", "=V1 7"]);
    assert_eq!(r.var(0), 3.0);
    // The line after the loop still runs.
    assert_eq!(r.var(1), 7.0);
}

#[test]
fn test_while_false_never_enters() {
    let mut r = runtime();
    run(&mut r, &["while 0", "  =V0 1", "=V1 2"]);
    assert_eq!(r.var(0), 0.0);
    assert_eq!(r.var(1), 2.0);
}

#[test]
fn test_while_loops_at_end_of_program() {
    // No line after the body: the loop closes against the virtual
    // indent at end of program and still re-enters.
    let mut r = runtime();
    run(&mut r, &["while < V0 4", "  ++V0"]);
    assert_eq!(r.var(0), 4.0);
}

#[test]
fn test_break_leaves_loop() {
    let mut r = runtime();
    run(&mut r, &["while 1", "  break", "=V0 5"]);
    assert_eq!(r.var(0), 5.0);
}

#[test]
fn test_break_without_while_is_ignored() {
    let mut r = runtime();
    run(&mut r, &["break", "=V0 5"]);
    assert_eq!(r.var(0), 5.0);
}

#[test]
fn test_break_unwinds_nested_loops_one_at_a_time() {
    let mut r = runtime();
    run(&mut r, &["while 1", "  while 1", "    break", "  break", "=V0 9"]);
    assert_eq!(r.var(0), 9.0);
}

#[test]
fn test_nested_while() {
    let mut r = runtime();
    run(
        &mut r,
        &["while < V0 2", "  while < V1 2", "    ++V1", "  ++V0"],
    );
    assert_eq!(r.var(0), 2.0);
    assert_eq!(r.var(1), 2.0);
}

#[test]
fn test_unconditional_loop_halts_at_step_cap() {
    // Two line-steps per iteration against a cap of 1000 steps: the run
    // halts silently after 500 increments.
    let mut r = runtime();
    run(&mut r, &["while 1", "  ++V0"]);
    assert_eq!(r.var(0), 500.0);
}

#[test]
fn test_conditional_break() {
    let mut r = runtime();
    run(
        &mut r,
        &[
            "while 1",
            "  ++V0",
            "  if >= V0 3",
            "    break",
            "  +=V1 1",
            "=V2 1",
        ],
    );
    assert_eq!(r.var(0), 3.0);
    assert_eq!(r.var(1), 2.0);
    assert_eq!(r.var(2), 1.0);
}

#[test]
fn test_skipped_tail_if_falls_out_of_loop() {
    // A false `if` whose block closes the loop body skips straight past
    // the loop close: the jump lands below the while with the previous
    // indent reset, so the loop is never re-entered. Long-standing
    // behavior that generated programs rely on.
    let mut r = runtime();
    run(&mut r, &["while 1", "  ++V0", "  if 0", "    ++V1", "=V2 1"]);
    assert_eq!(r.var(0), 1.0);
    assert_eq!(r.var(1), 0.0);
    assert_eq!(r.var(2), 1.0);
}
