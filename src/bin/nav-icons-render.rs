use std::env;
use std::fs;
use std::process;

use serde::Deserialize;

use nav_icons::editor::{item_preview, BlockNode};
use nav_icons::{
    render_item, ContainerAttributes, IconError, IconResult, ItemAttributes, RenderPass,
};

/// Render fixture: one item's markup plus its attribute records, with the
/// enclosing containers listed outermost-first.
#[derive(Deserialize)]
struct Fixture {
    markup: String,
    item: serde_json::Value,
    #[serde(default)]
    containers: Vec<serde_json::Value>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let emit_css = args.iter().any(|a| a == "--css");
    let files: Vec<&String> = args[1..].iter().filter(|a| *a != "--css").collect();

    if files.is_empty() {
        eprintln!("Usage: nav-icons-render [--css] <fixture.json>...");
        eprintln!();
        eprintln!("Fixture format:");
        eprintln!("  {{ \"markup\": \"<li>...</li>\", \"item\": {{...}}, \"containers\": [{{...}}] }}");
        eprintln!();
        eprintln!("Prints the rewritten markup (server path); with --css, the");
        eprintln!("editor-preview CSS for the same item instead.");
        process::exit(1);
    }

    let mut exit_code = 0;
    for file_path in files {
        match render_fixture(file_path, emit_css) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("✗ {}: {}", file_path, e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_fixture(path: &str, emit_css: bool) -> IconResult<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| IconError::Fixture(format!("failed to read {}: {}", path, e)))?;
    let fixture: Fixture =
        serde_json::from_str(&content).map_err(|e| IconError::Fixture(e.to_string()))?;

    let item = ItemAttributes::from_json(fixture.item)?;
    let containers = fixture
        .containers
        .into_iter()
        .map(ContainerAttributes::from_json)
        .collect::<IconResult<Vec<_>>>()?;

    if emit_css {
        // Rebuild the same nesting as a block tree and take the editor path.
        let mut node = BlockNode::Item {
            attributes: item,
            children: Vec::new(),
        };
        for attrs in containers.into_iter().rev() {
            node = BlockNode::Container {
                attributes: attrs,
                children: vec![node],
            };
        }
        let depth = count_depth(&node);
        let path: Vec<usize> = vec![0; depth];
        return Ok(item_preview(&node, &path, 1)
            .map(|preview| preview.css)
            .unwrap_or_default());
    }

    let mut pass = RenderPass::new();
    for attrs in containers {
        pass.enter_container(attrs);
    }
    Ok(render_item(&pass, &fixture.markup, &item))
}

fn count_depth(node: &BlockNode) -> usize {
    match node {
        BlockNode::Item { .. } => 0,
        _ => 1 + node.children().first().map(count_depth).unwrap_or(0),
    }
}
