//! Headless walkthrough: build the starter graph, run a few frames, print
//! what a renderer would draw.

use patchbay::{InputEvent, NodeEditor, Pos2};

fn main() {
    env_logger::init();

    let mut editor = NodeEditor::with_starter_graph();

    // A few frames at ~60 fps
    for _ in 0..3 {
        editor.update(&[InputEvent::Tick { elapsed_ms: 16 }]);
    }

    let frame = editor.frame_snapshot();
    println!(
        "Graph has {} nodes and {} wires",
        frame.nodes.len(),
        frame.wires.len()
    );
    for node in &frame.nodes {
        match &node.body_text {
            Some(text) => println!("  {:<10} -> {}", node.title, text),
            None => println!("  {:<10}", node.title),
        }
    }

    // Open the creation menu the way a right-click would
    editor.handle_event(&InputEvent::PointerPressed {
        button: patchbay::PointerButton::Secondary,
        position: Pos2::new(300.0, 400.0),
    });
    if let Some(menu) = editor.frame_snapshot().menu {
        println!("Creation menu offers {} node kinds:", menu.items.len());
        for (label, _rect) in &menu.items {
            println!("  {}", label);
        }
    }
}
