mod campus;

use std::path::PathBuf;

use anyhow::Context;
use vista_engine::config::VistaConfig;
use vista_engine::logging::{init_logging, LoggingConfig};
use vista_engine::signal::MediaQuery;
use vista_engine::storage::FileStore;
use vista_engine::theme::{DocumentSurface, ThemeContext};
use vista_engine::windowing::{GroupedItems, VirtualScroll};
use vista_ui::prelude::*;

use campus::Building;

const PREFERS_DARK_VAR: &str = "VISTA_PREFERS_DARK";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => VistaConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => VistaConfig::default(),
    };
    init_logging(LoggingConfig::from(&config.logging));

    let store_path = args.next().map_or_else(|| PathBuf::from("vista-state.json"), PathBuf::from);
    let store = FileStore::open(&store_path)
        .with_context(|| format!("opening theme store {}", store_path.display()))?;

    let platform = MediaQuery::new(prefers_dark_from_env());
    let surface = config.theme.document_surface();
    let (theme, _follow) = ThemeContext::load(
        Box::new(store),
        Box::new(surface.clone()),
        &platform,
        config.theme.storage_key.clone(),
    );

    println!();
    println!("  vista studio · campus directory preview");
    println!("  store  {}", store_path.display());
    println!("  theme  {} ({})", theme.mode(), theme.resolved());
    println!();

    let buildings = campus::directory(6);
    scroll_sweep(&config, buildings.len());
    cycle_theme(&theme, &surface);
    run_frames(&config, &theme, buildings);

    Ok(())
}

/// `1`/`true` and `0`/`false`; anything else means the platform is silent.
fn prefers_dark_from_env() -> Option<bool> {
    let raw = std::env::var(PREFERS_DARK_VAR).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "dark" => Some(true),
        "0" | "false" | "light" => Some(false),
        other => {
            log::warn!("ignoring {PREFERS_DARK_VAR}={other:?}");
            None
        }
    }
}

// ── windowing ─────────────────────────────────────────────────────────────

fn scroll_sweep(config: &VistaConfig, count: usize) {
    let mut scroll = VirtualScroll::new(count, config.list.viewport());
    let step = scroll.viewport().container_height().max(1.0);

    println!("  [LIST] {count} buildings, extent {:.0}px", scroll.total_extent());
    let mut offset = 0.0;
    loop {
        scroll.on_scroll(offset);
        let window = scroll.window();
        match (window.start_index(), window.end_index()) {
            (Some(start), Some(end)) => {
                let mounted = window.len();
                println!(
                    "    offset {offset:>6.0}  rows {start:>3}..={end:<3} ({mounted} mounted)"
                );
            }
            _ => println!("    offset {offset:>6.0}  (empty)"),
        }
        if offset >= scroll.max_offset() {
            break;
        }
        offset = (offset + step).min(scroll.max_offset());
    }
    println!();
}

// ── theme ─────────────────────────────────────────────────────────────────

fn cycle_theme(theme: &ThemeContext, surface: &DocumentSurface) {
    println!("  [THEME] cycling");
    for _ in 0..3 {
        let snap = theme.toggle();
        println!(
            "    {:<6} -> {:<5}  classes {:?}  theme-color {}",
            snap.mode.as_str(),
            snap.resolved.as_str(),
            surface.classes(),
            surface.meta(DocumentSurface::THEME_COLOR).unwrap_or_default(),
        );
    }
    println!();
}

// ── frames ────────────────────────────────────────────────────────────────

fn run_frames(config: &VistaConfig, theme: &ThemeContext, buildings: Vec<Building>) {
    let viewport = config.list.viewport();
    let groups = GroupedItems::new(buildings.iter().cloned(), |b: &Building| b.category, Some(&0));

    let sections = GroupedList::new(groups, viewport, |b: &Building| b.name.clone())
        .on_toggle(|key, open| {
            log::info!("section {key} {}", if open { "opened" } else { "closed" })
        });
    let directory = VirtualList::new(buildings, viewport, |b: &Building| {
        format!("{} · {}", b.name, b.category)
    })
    .on_select(|i, b| log::info!("selected #{i} {}", b.name));

    let mut root: Element = Column::new()
        .child(ThemeToggle::new(theme.clone()))
        .child(sections)
        .child(directory)
        .gap(8.0)
        .into();

    let mut scene = UiScene::new().theme(theme.clone());
    let size = Vec2::new(360.0, 44.0 + 2.0 * config.list.container_height + 16.0);
    let list_pos = Vec2::new(20.0, size.y - 20.0);
    let frames = [
        UiInput::default(),
        UiInput { mouse_pos: Vec2::new(20.0, 10.0), mouse_clicked: true, ..UiInput::default() },
        UiInput { mouse_pos: list_pos, scroll_delta: 12.0, ..UiInput::default() },
        UiInput { mouse_pos: list_pos, mouse_clicked: true, ..UiInput::default() },
        UiInput { mouse_pos: list_pos, keys_pressed: vec![Key::End], ..UiInput::default() },
    ];

    println!("  [FRAMES]");
    for (n, input) in frames.iter().enumerate() {
        let dl = scene.frame(&mut root, size, input);
        let texts: Vec<&str> = dl.texts().collect();
        println!(
            "    frame {n}: {} draw items, {} labels, first {:?}",
            dl.items().len(),
            texts.len(),
            texts.first().copied().unwrap_or("")
        );
    }
    println!("    theme now {} ({})", theme.mode(), theme.resolved());
    println!();
}
