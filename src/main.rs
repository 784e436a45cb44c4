use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use wearpick::api::{self, parse_color};
use wearpick::models::{AppConfig, PickRequest, ScreenSpec};
use wearpick::server;
use wearpick::services::{PickerSession, RenderService};

#[derive(Parser)]
#[command(name = "wearpick")]
#[command(about = "Wearpick - wrap-around swatch color picker for watch screens")]
struct Cli {
    /// Configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Show where a color lands in the swatch grid
    Locate {
        /// Hex color (e.g. "#FF8000")
        color: String,

        /// Configured palette to search instead of the rainbow
        #[arg(short, long)]
        palette: Option<String>,
    },
    /// Print every row of swatches as hex colors
    Swatches {
        /// Configured palette to print instead of the rainbow
        #[arg(short, long)]
        palette: Option<String>,
    },
    /// Render a picker screen directly to a PNG file
    Render {
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Previous color to open on (e.g. "#00FF00")
        #[arg(short, long)]
        color: Option<String>,

        /// Configured palette to show instead of the rainbow
        #[arg(short, long)]
        palette: Option<String>,

        /// Screen width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Screen height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Square screen (no wheel effect or round clip)
        #[arg(long)]
        square: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wearpick API",
        description = "Wrap-around swatch color picker for round and square watch screens",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_open,
        api::handle_rows,
        api::handle_tap,
        api::handle_cancel,
        api::handle_result,
        api::handle_screen,
        api::handle_locate,
    ),
    components(schemas(
        api::OpenPickRequest,
        api::OpenPickResponse,
        api::CellResponse,
        api::RowsResponse,
        api::RowResponse,
        api::TapRequest,
        api::PickResultResponse,
        api::LocateResponse,
    )),
    tags(
        (name = "Picker", description = "Picker sessions and results"),
        (name = "Grid", description = "Swatch grid lookups")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Serve) => run_server(config_file.as_deref()).await,
        Some(Commands::Locate { color, palette }) => {
            init_cli_logging();
            let config = AppConfig::load(config_file.as_deref());
            run_locate_command(&config, &color, palette.as_deref())
        }
        Some(Commands::Swatches { palette }) => {
            init_cli_logging();
            let config = AppConfig::load(config_file.as_deref());
            run_swatches_command(&config, palette.as_deref())
        }
        Some(Commands::Render {
            output,
            color,
            palette,
            width,
            height,
            square,
        }) => {
            init_cli_logging();
            let config = AppConfig::load(config_file.as_deref());
            let screen = ScreenSpec::from_dimensions(
                width.unwrap_or(config.screen.width),
                height.unwrap_or(config.screen.height),
                !square && config.screen.round,
            )?;
            run_render_command(&config, &output, color.as_deref(), palette.as_deref(), screen)
        }
        None => {
            run_status_command(config_file.as_deref());
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wearpick=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Print the cell, list index and swatch for a color
fn run_locate_command(
    config: &AppConfig,
    color: &str,
    palette: Option<&str>,
) -> anyhow::Result<()> {
    let color = parse_color(color)?;
    let source = config.swatch_source(palette)?;

    let cell = source.locate(color);
    let swatch = source.color_at(cell.row, cell.column);

    println!("Color:      {color}");
    println!("Cell:       row {}, column {}", cell.row, cell.column);
    println!("List index: {}", source.initial_list_index(Some(color)));
    if swatch == color {
        println!("Swatch:     {swatch} (exact)");
    } else {
        println!("Swatch:     {swatch}");
    }

    Ok(())
}

/// Print the grid, one row per line
fn run_swatches_command(config: &AppConfig, palette: Option<&str>) -> anyhow::Result<()> {
    let source = config.swatch_source(palette)?;
    let width = source.row_count().saturating_sub(1).to_string().len();

    for row in 0..source.row_count() {
        let colors: Vec<String> = source.row_at(row).iter().map(|c| c.to_string()).collect();
        println!("{row:>width$}  {}", colors.join(" "));
    }

    Ok(())
}

/// Render the opening screen of a picker to a PNG file (no server needed)
fn run_render_command(
    config: &AppConfig,
    output: &Path,
    color: Option<&str>,
    palette: Option<&str>,
    screen: ScreenSpec,
) -> anyhow::Result<()> {
    let mut request = PickRequest::new(0);
    if let Some(color) = color {
        request = request.old_color(parse_color(color)?);
    }

    let source = config.swatch_source(palette)?;
    let session = PickerSession::new(&request, source, screen, config.picker.list_item_height);
    let renderer = RenderService::new(config.picker.clone());

    let png_bytes = renderer
        .render_blocking(&session)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    std::fs::write(output, &png_bytes)?;
    println!("Rendered {} ({} bytes)", output.display(), png_bytes.len());

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_file: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();

    println!("Wearpick v{VERSION}");
    println!("Wrap-around swatch color picker for watch screens\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE")
            .as_deref()
            .unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    let config = match config_file {
        Some(path) if path.exists() => {
            println!("  Source:   {}", path.display());
            AppConfig::load(Some(path))
        }
        Some(path) => {
            println!("  Source:   defaults ({} not found)", path.display());
            AppConfig::default()
        }
        None => {
            println!("  Source:   defaults");
            AppConfig::default()
        }
    };
    let grid = &config.grid;
    match grid.dimensions() {
        Ok(dims) => println!(
            "  Grid:     {} hues x {} saturations + grey = {} rows, {} values",
            grid.hue_count,
            grid.saturation_count,
            dims.row_count(),
            grid.value_count
        ),
        Err(e) => println!("  Grid:     invalid ({e})"),
    }
    let mut names: Vec<&str> = config.palettes.keys().map(String::as_str).collect();
    names.sort_unstable();
    if names.is_empty() {
        println!("  Palettes: (none)");
    } else {
        println!("  Palettes: {}", names.join(", "));
    }
    let screen = config.screen.spec();
    println!(
        "  Screen:   {}x{} {}",
        screen.width,
        screen.height,
        if screen.round { "round" } else { "square" }
    );

    println!("\nCommands:");
    println!("  wearpick serve      Start the HTTP server");
    println!("  wearpick locate     Show where a color lands in the grid");
    println!("  wearpick swatches   Print the swatch grid");
    println!("  wearpick render     Render a picker screen to PNG file");
    println!("\nRun 'wearpick --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_file: Option<&Path>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wearpick=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = %config_file.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );
    let config = AppConfig::load(config_file);

    let state = server::create_app_state(config)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Wearpick server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
