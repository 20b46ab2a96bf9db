//! Document review workflow loaded from the JSON wire format.
//!
//! Demonstrates:
//! - Deserializing a `Config` with serde
//! - Querying the table with `states` and `states_handling`
//! - `reset` and `clear_history` in a longer session
//! - What branching mid-history does to the timeline

use rewind_fsm::{Config, Fsm, FsmResult};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft":     { "transitions": { "submit": "review" } },
        "review":    { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "retract": "draft" } },
        "archived":  {}
    }
}"#;

fn main() -> FsmResult<()> {
    let config: Config = serde_json::from_str(WORKFLOW).expect("workflow config is valid JSON");
    let mut doc = Fsm::new(config)?;

    println!("states:           {:?}", doc.states());
    println!("handle 'reject':  {:?}", doc.states_handling("reject"));

    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("published via:    {:?}", doc.history());

    // step back to review, then branch directly to the archive shelf
    doc.undo();
    doc.change_state("archived")?;
    println!("active now:       {}", doc.state());
    println!("timeline kept:    {:?}", doc.history());

    // the branched-to state was never recorded; redo resurfaces "published"
    doc.undo();
    doc.redo();
    println!("after undo+redo:  {}", doc.state());

    doc.reset()?;
    println!("after reset:      {}", doc.state());

    doc.clear_history()?;
    println!("after clear:      {:?} (undo available: {})", doc.history(), {
        let mut probe = doc.clone();
        probe.undo()
    });

    Ok(())
}
