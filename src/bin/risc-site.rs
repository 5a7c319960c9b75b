use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use risc_site::{
    ActiveSectionResolver, CarouselConfig, DragController, Feed, HealthReport, Page, PageEvent,
    Project, Publication, Roster, ScrollState, SectionId, SiteConfig, StaticLayout, StaticPage,
    TeamMember, handle_contact, load_feed,
};

#[derive(Parser, Debug)]
#[command(name = "risc-site", version)]
struct Cli {
    /// Site config JSON (defaults apply when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the active section for one scroll offset.
    Resolve(ResolveArgs),
    /// Replay scrolls and a nav click against a static layout and print the page state.
    Simulate(SimulateArgs),
    /// Simulate one carousel drag and print where it comes to rest.
    Carousel(CarouselArgs),
    /// Run a contact POST body through the endpoint handler.
    Contact(ContactArgs),
    /// Print the health report.
    Health,
    /// Load a data feed (falling back to placeholders) and print it. The team feed is
    /// printed as the ordered roster with the founders alongside.
    Feed(FeedArgs),
    /// Validate a site config and print it with defaults filled in.
    CheckConfig,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Anchor layout JSON: `{ "<id>": { "offset_top": .., "height": .. } }`.
    #[arg(long)]
    layout: PathBuf,

    /// Vertical scroll offset in pixels.
    #[arg(long)]
    scroll_y: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[arg(long)]
    layout: PathBuf,

    /// Scroll offsets applied in order.
    #[arg(long = "scroll")]
    scrolls: Vec<f64>,

    /// Section whose rail indicator is clicked after the scrolls.
    #[arg(long)]
    click: Option<String>,

    /// Frame rate used to drive the programmatic scroll.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct CarouselArgs {
    #[arg(long)]
    content_width: f64,

    #[arg(long)]
    viewport_width: f64,

    /// Horizontal pointer travel (negative drags toward later cards).
    #[arg(long, allow_hyphen_values = true)]
    drag: f64,

    /// How long the drag took.
    #[arg(long, default_value_t = 200.0)]
    duration_ms: f64,
}

#[derive(Parser, Debug)]
struct ContactArgs {
    /// Raw request body; built from `--email`/`--message` when omitted.
    #[arg(long, conflicts_with_all = ["email", "message"])]
    body: Option<String>,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    message: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FeedKind {
    Team,
    Projects,
    Publications,
}

#[derive(Parser, Debug)]
struct FeedArgs {
    #[arg(value_enum)]
    kind: FeedKind,

    /// Feed document path.
    #[arg(long)]
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(&cfg, args),
        Command::Simulate(args) => cmd_simulate(cfg, args),
        Command::Carousel(args) => cmd_carousel(cfg.carousel, args),
        Command::Contact(args) => cmd_contact(args),
        Command::Health => print_json(&HealthReport::collect(std::time::Instant::now())),
        Command::Feed(args) => cmd_feed(args),
        Command::CheckConfig => {
            cfg.validate().context("site config is invalid")?;
            print_json(&cfg)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    SiteConfig::from_path(path).with_context(|| format!("load config '{}'", path.display()))
}

fn load_layout(path: &Path) -> anyhow::Result<StaticLayout> {
    let f = std::fs::File::open(path)
        .with_context(|| format!("open layout '{}'", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse layout '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_resolve(cfg: &SiteConfig, args: ResolveArgs) -> anyhow::Result<()> {
    let layout = load_layout(&args.layout)?;
    let mut registry = cfg.registry()?;
    registry.refresh_geometry(&layout);
    let mut resolver = ActiveSectionResolver::new(cfg.tracker, &registry);
    let state = ScrollState {
        scroll_y: args.scroll_y,
    };
    let (resolution, _) = resolver.resolve(state, &registry);
    print_json(&serde_json::json!({
        "scroll_y": state.scroll_y,
        "effective_y": resolver.effective_y(state),
        "active": resolver.active(),
        "resolution": format!("{resolution:?}"),
    }))
}

fn cmd_simulate(cfg: SiteConfig, args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0.0, "--fps must be > 0");
    let host = StaticPage {
        layout: load_layout(&args.layout)?,
        ..StaticPage::default()
    };
    let (mut page, _) = Page::mount(cfg, &host, 0.0, 0.0)?;
    let dt = 1.0 / args.fps;
    let mut now = 0.0;
    for scroll_y in args.scrolls {
        now += dt;
        page.handle(PageEvent::Scroll { scroll_y }, &host, now)?;
    }
    if let Some(section) = args.click {
        now += dt;
        page.handle(
            PageEvent::NavClick {
                section: SectionId::new(section),
            },
            &host,
            now,
        )?;
        while page.is_scrolling() {
            now += dt;
            page.handle(PageEvent::Tick, &host, now)?;
        }
    }
    print_json(&page.snapshot(now))
}

fn cmd_carousel(cfg: CarouselConfig, args: CarouselArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.duration_ms > 0.0, "--duration-ms must be > 0");
    let range = (args.content_width - args.viewport_width).max(0.0);
    let mut drag = DragController::new(cfg);
    drag.set_range(range);

    let steps = 10;
    let secs = args.duration_ms / 1000.0;
    drag.pointer_down(0.0, 0.0);
    for i in 1..=steps {
        let f = f64::from(i) / f64::from(steps);
        drag.pointer_move(args.drag * f, secs * f);
    }
    let commit = drag.pointer_up(secs);
    print_json(&serde_json::json!({
        "range_px": range,
        "dragged": commit.is_some(),
        "release_offset_px": commit.map(|c| c.release_offset_px),
        "release_velocity_px_per_sec": commit.map(|c| c.release_velocity_px_per_sec),
        "committed_offset_px": drag.committed_offset(),
    }))
}

fn cmd_contact(args: ContactArgs) -> anyhow::Result<()> {
    let body = match args.body {
        Some(body) => body,
        None => serde_json::json!({ "email": args.email, "message": args.message }).to_string(),
    };
    let resp = handle_contact(&body);
    print_json(&serde_json::json!({
        "status": resp.status,
        "body": resp.body(),
    }))
}

fn cmd_feed(args: FeedArgs) -> anyhow::Result<()> {
    match args.kind {
        FeedKind::Team => {
            let feed = load_feed::<TeamMember>(&args.path);
            print_json(&serde_json::json!({
                "source": feed.source,
                "roster": Roster::new(feed.items),
            }))
        }
        FeedKind::Projects => print_feed(load_feed::<Project>(&args.path)),
        FeedKind::Publications => print_feed(load_feed::<Publication>(&args.path)),
    }
}

fn print_feed<T: serde::Serialize>(feed: Feed<T>) -> anyhow::Result<()> {
    print_json(&serde_json::json!({
        "source": feed.source,
        "items": feed.items,
    }))
}
