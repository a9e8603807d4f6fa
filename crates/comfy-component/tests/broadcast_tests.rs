//! Integration tests for broadcast delivery through component trees.
//!
//! Covers normalization, matching counts, ordering, logging, and the
//! player/movement scenario end to end.

use comfy_component::testing::{BroadcastHarness, BroadcastResult, CallRecorder, MemorySink};
use comfy_component::{
    BroadcastExt, Broadcastable, Component, ComponentConfig, ComponentError, ComponentRef,
    LogSink, LoggingComponent, LoggingReceiver, Node, Receiver,
};
use comfy_event::{EventArgs, Payload};
use comfy_types::ComponentId;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// Branch that keeps every payload it was handed before forwarding it.
struct Witness {
    id: ComponentId,
    node: Node,
    seen: Mutex<Vec<Payload>>,
}

impl Witness {
    fn spawn(name: &str) -> Arc<Self> {
        Arc::new(Self {
            id: ComponentId::new(name),
            node: Node::new(),
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl Broadcastable for Witness {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn dispatch(&self, payload: &Payload) -> Result<(), ComponentError> {
        self.seen.lock().push(payload.clone());
        self.node.forward(payload)
    }
}

// =============================================================================
// Normalization
// =============================================================================

mod normalization {
    use super::*;

    #[test]
    fn scalars_wrapped_sequences_preserved() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        root.connect(Receiver::spawn("*", recorder.callback()))
            .expect("acyclic attach should succeed");

        root.invoke(
            EventArgs::new()
                .arg("scalar", 7)
                .arg("text", "hi")
                .arg("seq", json!([3, 1, 2]))
                .arg("empty", json!([])),
        )
        .expect("broadcast should succeed");

        assert_eq!(
            recorder.values(),
            vec![
                vec![json!(7)],
                vec![json!("hi")],
                vec![json!(3), json!(1), json!(2)],
                vec![],
            ]
        );
    }

    #[test]
    fn child_sees_same_payload_as_parent() {
        let parent = Witness::spawn("Parent");
        let child = Witness::spawn("Child");
        parent
            .connect(Arc::clone(&child) as ComponentRef)
            .expect("acyclic attach should succeed");

        parent
            .invoke(EventArgs::new().arg("move", 5).arg("jump", json!([1, 2])))
            .expect("broadcast should succeed");

        let parent_seen = parent.seen.lock().clone();
        let child_seen = child.seen.lock().clone();
        assert_eq!(parent_seen.len(), 1);
        assert_eq!(parent_seen, child_seen);
        assert_eq!(child_seen[0].names().collect::<Vec<_>>(), vec!["move", "jump"]);
    }

    #[test]
    fn every_child_receives_every_key() {
        let root = Component::spawn("Root");
        let witnesses: Vec<Arc<Witness>> = (0..3)
            .map(|i| Witness::spawn(&format!("W{i}")))
            .collect();
        root.connect(
            witnesses
                .iter()
                .map(|w| Arc::clone(w) as ComponentRef)
                .collect::<Vec<_>>(),
        )
        .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("a", 1).arg("b", 2))
            .expect("broadcast should succeed");

        for witness in &witnesses {
            let seen = witness.seen.lock();
            assert_eq!(seen.len(), 1);
            assert_eq!(seen[0].len(), 2);
            assert!(seen[0].contains("a") && seen[0].contains("b"));
        }
    }
}

// =============================================================================
// Matching
// =============================================================================

mod matching {
    use super::*;

    #[test]
    fn wildcard_invoked_once_per_key() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        root.connect(Receiver::spawn("*", recorder.callback()))
            .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("a", 1).arg("b", 2).arg("c", 3))
            .expect("broadcast should succeed");

        assert_eq!(recorder.count(), 3);
    }

    #[test]
    fn named_receiver_invoked_at_most_once() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        root.connect(Receiver::spawn("b", recorder.callback()))
            .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("a", 1).arg("b", 2).arg("c", 3))
            .expect("broadcast should succeed");
        root.invoke(EventArgs::new().arg("a", 1))
            .expect("broadcast should succeed");

        assert_eq!(recorder.values(), vec![vec![json!(2)]]);
    }

    #[test]
    fn jump_receiver_never_invoked_by_move() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        root.connect(Receiver::spawn("jump", recorder.callback()))
            .expect("acyclic attach should succeed");

        for step in 0..10 {
            root.invoke(EventArgs::new().arg("move", step))
                .expect("broadcast should succeed");
        }

        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn two_wildcards_fire_in_attach_then_key_order() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        root.connect(vec![
            Receiver::spawn("*", recorder.tagged("first")),
            Receiver::spawn("*", recorder.tagged("second")),
        ])
        .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("move", 1).arg("jump", 2))
            .expect("broadcast should succeed");

        assert_eq!(recorder.tags(), vec!["first", "first", "second", "second"]);
        assert_eq!(
            recorder.values(),
            vec![
                vec![json!(1)],
                vec![json!(2)],
                vec![json!(1)],
                vec![json!(2)],
            ]
        );
    }

    #[test]
    fn repeated_broadcasts_are_independent() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        let group = Component::spawn("Group");
        group
            .connect(vec![
                Receiver::spawn("*", recorder.tagged("any")),
                Receiver::spawn("b", recorder.tagged("b")),
            ])
            .expect("acyclic attach should succeed");
        root.connect(group).expect("acyclic attach should succeed");

        let args = EventArgs::new().arg("a", json!([1, 2])).arg("b", "x");
        root.invoke(args.clone()).expect("first broadcast");
        let first = recorder.calls();
        root.invoke(args).expect("second broadcast");
        let all = recorder.calls();

        assert_eq!(first.len(), 3);
        assert_eq!(&all[..3], &first[..]);
        assert_eq!(&all[3..], &first[..]);
    }
}

// =============================================================================
// Logging
// =============================================================================

mod logging {
    use super::*;

    #[test]
    fn logging_component_logs_n_times_m_before_children() {
        let sink = MemorySink::shared();
        let root: ComponentRef = Arc::new(LoggingComponent::with_sink("Root", sink.clone()));
        let child_sink = Arc::clone(&sink);
        root.connect(Receiver::spawn("*", move |_: &[Value]| {
            child_sink.log("child");
            Ok(())
        }))
        .expect("acyclic attach should succeed");

        let (n, m) = (3, 4);
        for round in 0..n {
            let args: EventArgs = (0..m).map(|k| (format!("k{k}"), round)).collect();
            root.invoke(args).expect("broadcast should succeed");
        }

        let lines = sink.lines();
        let logged = lines.iter().filter(|l| l.starts_with("LOG: Root")).count();
        assert!(logged >= n * m);

        // Per broadcast: m log records, then m child records.
        for chunk in lines.chunks(2 * m) {
            assert!(chunk[..m].iter().all(|l| l.starts_with("LOG: Root received: ")));
            assert!(chunk[m..].iter().all(|l| l == "child"));
        }
    }

    #[test]
    fn logging_receiver_honors_toml_config() {
        let config = ComponentConfig::from_toml("log_wildcard_matches = true")
            .expect("valid TOML should parse");
        let sink = MemorySink::shared();
        let root = Component::spawn("Root");
        let wildcard_logger = LoggingReceiver::with_config("*", |_| Ok(()), &config);
        let wildcard_logger: ComponentRef = Arc::new(wildcard_logger.with_sink(sink.clone()));
        root.connect(wildcard_logger)
            .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("a", json!([1, "two"])))
            .expect("broadcast should succeed");

        assert_eq!(sink.lines(), vec!["LOG: Root caught event: a > 1, two"]);
    }
}

// =============================================================================
// Player / Movement scenario
// =============================================================================

mod player_movement {
    use super::*;

    struct Scenario {
        sink: Arc<MemorySink>,
        moves: Arc<Mutex<Vec<(i64, i64)>>>,
        harness: BroadcastHarness,
    }

    fn build() -> Scenario {
        let sink = MemorySink::shared();
        let moves = Arc::new(Mutex::new(Vec::new()));

        let player: ComponentRef = Arc::new(LoggingComponent::with_sink("Player", sink.clone()));
        let movement = Component::spawn("Movement");
        let recorded = Arc::clone(&moves);
        let on_move = LoggingReceiver::new("move", move |args: &[Value]| {
            // f(x, y=0): exactly one or two positional values
            if args.is_empty() || args.len() > 2 {
                return Err(format!("f takes 1 or 2 args, got {}", args.len()).into());
            }
            let x = args[0].as_i64().ok_or("x must be an integer")?;
            let y = match args.get(1) {
                Some(value) => value.as_i64().ok_or("y must be an integer")?,
                None => 0,
            };
            recorded.lock().push((x, y));
            Ok(())
        });
        let on_move: ComponentRef = Arc::new(on_move.with_sink(sink.clone()));
        movement
            .connect(on_move)
            .expect("acyclic attach should succeed");
        player
            .connect(movement)
            .expect("acyclic attach should succeed");

        Scenario {
            sink,
            moves,
            harness: BroadcastHarness::new(player),
        }
    }

    #[test]
    fn sequence_move_logged_and_invoked_once() {
        let mut scenario = build();

        scenario
            .harness
            .broadcast(EventArgs::new().arg("move", json!([-1, -1])))
            .expect("broadcast should succeed");

        assert_eq!(*scenario.moves.lock(), vec![(-1, -1)]);
        assert_eq!(
            scenario.sink.lines(),
            vec![
                "LOG: Player received: -1, -1",
                "LOG: Movement caught event: move > -1, -1",
            ]
        );
    }

    #[test]
    fn scalar_move_uses_default_y() {
        let mut scenario = build();

        scenario
            .harness
            .broadcast(EventArgs::new().arg("move", json!([-1, -1])))
            .expect("first broadcast should succeed");
        scenario
            .harness
            .broadcast(EventArgs::new().arg("move", 5))
            .expect("second broadcast should succeed");

        assert_eq!(*scenario.moves.lock(), vec![(-1, -1), (5, 0)]);
        assert!(scenario
            .harness
            .broadcast_log()
            .iter()
            .all(|record| record.result == BroadcastResult::Ok));
    }

    #[test]
    fn unrelated_events_only_logged_by_player() {
        let mut scenario = build();

        scenario
            .harness
            .broadcast(EventArgs::new().arg("jump", true))
            .expect("broadcast should succeed");

        assert!(scenario.moves.lock().is_empty());
        assert_eq!(scenario.sink.lines(), vec!["LOG: Player received: true"]);
    }

    #[test]
    fn direct_root_broadcast_skips_harness_log() {
        let scenario = build();
        let root = scenario.harness.root();

        root.invoke(EventArgs::new().arg("move", 2))
            .expect("broadcast should succeed");

        assert_eq!(root.id().name, "Player");
        assert_eq!(root.node().child_count(), 2);
        assert_eq!(*scenario.moves.lock(), vec![(2, 0)]);
        assert!(scenario.harness.broadcast_log().is_empty());
    }

    #[test]
    fn callback_failure_surfaces_to_caller() {
        let mut scenario = build();

        let err = scenario
            .harness
            .broadcast(EventArgs::new().arg("move", json!([1, 2, 3])))
            .expect_err("three args is a callback failure");

        assert!(matches!(err, ComponentError::Callback { ref event, .. } if event == "move"));
        assert_eq!(
            err.callback_error().map(ToString::to_string),
            Some("f takes 1 or 2 args, got 3".to_string())
        );
        assert!(matches!(
            scenario.harness.broadcast_log()[0].result,
            BroadcastResult::Err { .. }
        ));
    }
}
