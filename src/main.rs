//! Edgekit CLI
//!
//! Loads a scene description (TOML), builds the view hierarchy, and prints
//! the computed frame of every view. Useful for inspecting snap combinations
//! without writing a host program.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use edgekit::{EngineConfig, Scene, ViewHierarchy, ViewId};

#[derive(Parser)]
#[command(name = "edgekit")]
#[command(about = "Inspect edge-snapping layouts described as TOML scenes")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Engine configuration file (TOML: safe area, animation defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print each view's constraint collection
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load engine configuration
    let config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    // Read scene source
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let scene = match Scene::from_toml_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let (ui, placed) = match scene.build(config) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for (name, view) in &placed {
        let indent = "  ".repeat(depth_of(&ui, *view));
        let frame = ui.frame(*view);
        println!(
            "{}[{}] x={:.1} y={:.1} w={:.1} h={:.1}",
            indent, name, frame.x, frame.y, frame.width, frame.height
        );
        if cli.debug {
            for constraint in ui.constraints(*view) {
                println!(
                    "{}    {} = {:.1}",
                    indent, constraint.identifier, constraint.constant
                );
            }
        }
    }
}

fn depth_of(ui: &ViewHierarchy, view: ViewId) -> usize {
    let mut depth = 0;
    let mut current = view;
    while let Some(parent) = ui.parent(current) {
        depth += 1;
        current = parent;
    }
    depth
}

fn print_intro() {
    println!(
        r#"Edgekit - declarative edge snapping for constraint-based layout

USAGE:
    edgekit [OPTIONS] [SCENE]
    cat scene.toml | edgekit

OPTIONS:
    -c, --config   Engine configuration (TOML: safe area, animation defaults)
    -d, --debug    Also print each view's constraint collection
    -h, --help     Print help

QUICK START:
    edgekit scene.toml

A scene names a root frame and a list of view attachments:

    [root]
    kind = "Screen"
    width = 390.0
    height = 844.0

    [[views]]
    kind = "Header"
    snap = "top_right_left"
    size = {{ height = 150.0 }}

Snap combinations: all, top_right_bottom, top_right_left, top_left_bottom,
bottom_right_left, top_left, top_right, bottom_left, bottom_right,
top_bottom_center_x, top_center_x, bottom_center_x, left_right_center_y,
left_center_y, right_center_y, center_x_y."#
    );
}
