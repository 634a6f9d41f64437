use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use crossterm::tty::IsTty;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Terminal, TerminalOptions, Viewport};

use super::args::{Cli, Commands};
use crate::config::Config;
use crate::routing::DeepLinkRouter;
use crate::store::FileStore;
use crate::surface::{Projector, SurfaceKind, SurfaceWidget, ViewModel};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Render { surface } => {
            let projector = projector(&config, cli.store.as_deref())?;
            render(&projector, &surface, out)
        }
        Commands::Preview { surface, width } => {
            let projector = projector(&config, cli.store.as_deref())?;
            let view = projector.project(parse_surface(&surface)?);
            preview(&view, width, out)
        }
        Commands::Route { uri, fallback } => {
            let router = DeepLinkRouter::from_config(&config.deep_link);
            writeln!(out, "{}", router.initial_route(Some(&uri), &fallback))?;
            Ok(())
        }
    }
}

fn projector(config: &Config, store_override: Option<&Path>) -> Result<Projector<FileStore>> {
    let store = match store_override.or(config.store.path.as_deref()) {
        Some(path) => FileStore::load(path)?,
        None => {
            tracing::debug!("No store configured, rendering defaults");
            FileStore::default()
        }
    };
    Ok(Projector::from_config(store, config))
}

fn parse_surface(id: &str) -> Result<SurfaceKind> {
    SurfaceKind::parse(id).ok_or_else(|| anyhow!("Unknown surface '{}'", id))
}

fn render(projector: &Projector<FileStore>, surface: &str, out: &mut impl Write) -> Result<()> {
    let views: Vec<ViewModel> = if surface == "all" {
        SurfaceKind::all()
            .iter()
            .map(|&kind| projector.project(kind))
            .collect()
    } else {
        vec![projector.project(parse_surface(surface)?)]
    };

    let json = if views.len() == 1 {
        serde_json::to_string_pretty(&views[0])
    } else {
        serde_json::to_string_pretty(&views)
    }
    .context("Failed to serialize view-model")?;

    writeln!(out, "{}", json)?;
    Ok(())
}

fn preview(view: &ViewModel, width: u16, out: &mut impl Write) -> Result<()> {
    let widget = SurfaceWidget::new(view);
    let height = widget.height();

    if !io::stdout().is_tty() {
        for line in plain_lines(widget, width, height) {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    terminal.draw(|frame| {
        let area = frame.area();
        frame.render_widget(widget, Rect::new(area.x, area.y, width.min(area.width), area.height));
    })?;
    writeln!(out)?;
    Ok(())
}

/// Draws into an off-screen buffer for pipes and redirects.
fn plain_lines(widget: SurfaceWidget<'_>, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    buf.content()
        .chunks(usize::from(width.max(1)))
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
