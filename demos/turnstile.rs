//! Classic coin-operated turnstile, the smallest useful state machine.
//!
//! Demonstrates:
//! - Building a table with the fluent builder
//! - Event-driven transitions with `trigger`
//! - Rejected events leaving the engine untouched
//! - Stepping the timeline backward and forward

use rewind_fsm::{FsmBuilder, FsmResult};

fn main() -> FsmResult<()> {
    let mut turnstile = FsmBuilder::new()
        .initial("locked")
        .transition("locked", "coin", "unlocked")
        .transition("unlocked", "push", "locked")
        .build()?;

    println!("start:            {}", turnstile.state());

    turnstile.trigger("coin")?;
    println!("after coin:       {}", turnstile.state());

    // pushing while locked has no rule; the error leaves everything intact
    turnstile.trigger("push")?;
    println!("after push:       {}", turnstile.state());
    if let Err(err) = turnstile.trigger("push") {
        println!("push while locked: rejected ({err})");
    }

    // walk the whole session backward, then forward again
    while turnstile.undo() {
        println!("undo:             {}", turnstile.state());
    }
    while turnstile.redo() {
        println!("redo:             {}", turnstile.state());
    }

    println!("timeline:         {:?}", turnstile.history());
    Ok(())
}
