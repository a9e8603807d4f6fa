//! Movement Example
//!
//! Demonstrates:
//! - A logging component at the root of a tree
//! - A custom component holding state, driven by a logging receiver
//! - Scalar and sequence arguments reaching the same callback
//! - Loading a [`ComponentConfig`] from TOML
//!
//! # Usage
//!
//! ```bash
//! cargo run --example movement
//! RUST_LOG=comfy_component=trace cargo run --example movement
//! ```

use comfy_component::{
    BroadcastExt, Broadcastable, ComponentConfig, ComponentError, LoggingComponent,
    LoggingReceiver, Node, Receiver, TracingSink,
};
use comfy_event::EventArgs;
use comfy_types::ComponentId;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Keeps a 2D position and moves it on `move` events.
struct Movement {
    id: ComponentId,
    node: Node,
    position: Arc<Mutex<[i64; 2]>>,
}

impl Movement {
    fn spawn() -> Result<Arc<Self>, ComponentError> {
        let movement = Arc::new(Self {
            id: ComponentId::new("Movement"),
            node: Node::new(),
            position: Arc::new(Mutex::new([0, 0])),
        });

        let position = Arc::clone(&movement.position);
        let on_move = LoggingReceiver::new("move", move |args: &[Value]| {
            let x = args.first().and_then(Value::as_i64).unwrap_or(0);
            let y = args.get(1).and_then(Value::as_i64).unwrap_or(0);
            let mut pos = position.lock();
            pos[0] += x;
            pos[1] += y;
            println!("Moved to {:?}", *pos);
            Ok(())
        });
        movement.connect(Arc::new(on_move) as Arc<dyn Broadcastable>)?;

        Ok(movement)
    }

    fn position(&self) -> [i64; 2] {
        *self.position.lock()
    }
}

impl Broadcastable for Movement {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }
}

const HUB_CONFIG: &str = r#"
track_ancestors = true
log_wildcard_matches = true
"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("=== Movement Example ===\n");

    let player = Arc::new(LoggingComponent::new("Player"));
    let movement = Movement::spawn()?;
    player.connect(Arc::clone(&movement) as Arc<dyn Broadcastable>)?;

    player.invoke(EventArgs::new().arg("move", json!([-1, -1])))?;
    player.invoke(EventArgs::new().arg("move", 5))?;
    player.invoke(EventArgs::new().arg("jump", true))?;

    println!("\nFinal position: {:?}", movement.position());

    println!("\n=== Wildcard logging from TOML config ===\n");

    let config = ComponentConfig::from_toml(HUB_CONFIG)?;
    let hub = Arc::new(LoggingComponent::with_sink("Hub", Arc::new(TracingSink)));
    let wildcard_logger = LoggingReceiver::with_config("*", |_| Ok(()), &config);
    let wildcard_logger = wildcard_logger.with_sink(Arc::new(TracingSink));
    hub.connect(vec![
        Arc::new(wildcard_logger) as Arc<dyn Broadcastable>,
        Receiver::spawn("dash", |args: &[Value]| {
            println!("dash x{}", args.len());
            Ok(())
        }),
    ])?;

    let args = EventArgs::new()
        .arg("dash", json!([1, 2, 3]))
        .arg("turn", "left");
    hub.invoke(args)?;

    Ok(())
}
