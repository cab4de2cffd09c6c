use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use thumbsmith::layout::wrap::wrapping_applies;
use thumbsmith::{
    Badge, Category, Compositor, FontLibrary, ImageSource, RenderRequest, StyleConfig, TextStyle,
};
use tracing_subscriber::EnvFilter;

/// Extra font directory loaded in addition to `--font`/`--font-dir`.
const FONT_DIR_ENV: &str = "THUMBSMITH_FONT_DIR";

#[derive(Parser, Debug)]
#[command(name = "thumbsmith", version, about = "Render news thumbnails")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a request JSON file to a PNG.
    Render(RenderArgs),
    /// Render an image with a headline using a category preset.
    Quick(QuickArgs),
    /// Print the recommended font size for a headline.
    Recommend(RecommendArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Font file to load (repeatable).
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Directory of font files to load (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Do not load the platform's installed fonts.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Request JSON; its `source` path is resolved next to this file.
    #[arg(long)]
    request: PathBuf,

    /// Output PNG path, or a directory to write `<category>-thumbnail.png` into.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Args, Debug)]
struct QuickArgs {
    /// Background image.
    #[arg(long)]
    image: PathBuf,

    /// Headline text.
    #[arg(long)]
    headline: String,

    /// Category key, e.g. `breaking-news`.
    #[arg(long, value_parser = parse_category, default_value = "breaking-news")]
    category: Category,

    /// Draw a translucent box behind the text instead of an outline.
    #[arg(long, default_value_t = false)]
    boxed: bool,

    /// Omit the category badge.
    #[arg(long, default_value_t = false)]
    no_badge: bool,

    /// Output PNG path, or a directory to write `<category>-thumbnail.png` into.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Headline text.
    #[arg(long)]
    headline: String,
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_key(s).ok_or_else(|| {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        format!("unknown category '{s}' (expected one of: {})", keys.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Quick(args) => cmd_quick(args),
        Command::Recommend(args) => cmd_recommend(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let request = RenderRequest::from_json_path(&args.request)
        .with_context(|| format!("load request '{}'", args.request.display()))?;
    render_to(&request, &args.fonts, &args.out)
}

fn cmd_quick(args: QuickArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let mut style = StyleConfig::from_preset(args.category, &args.headline);
    if args.boxed {
        style.text_style = TextStyle::BackgroundBox;
    }
    if args.no_badge {
        style.badge = Badge::disabled();
    }
    let request = RenderRequest::new(
        ImageSource::encoded(bytes),
        args.headline,
        args.category,
        style,
    );
    render_to(&request, &args.fonts, &args.out)
}

fn cmd_recommend(args: RecommendArgs) -> anyhow::Result<()> {
    let size = thumbsmith::recommend(args.headline.chars().count());
    let wraps = wrapping_applies(&args.headline, true);
    println!("font_size={size} wraps={wraps}");
    Ok(())
}

fn render_to(request: &RenderRequest, fonts: &FontArgs, out: &Path) -> anyhow::Result<()> {
    let mut compositor = Compositor::new(load_fonts(fonts)?);
    let image = compositor
        .render(request)
        .with_context(|| format!("render '{}'", request.category))?;

    let out = output_path(out, request.category);
    image
        .save(&out)
        .with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn load_fonts(args: &FontArgs) -> anyhow::Result<FontLibrary> {
    let mut lib = FontLibrary::new();
    if !args.no_system_fonts {
        lib.load_system_fonts();
    }
    if let Some(dir) = std::env::var_os(FONT_DIR_ENV) {
        lib.load_fonts_dir(Path::new(&dir));
    }
    for dir in &args.font_dirs {
        lib.load_fonts_dir(dir);
    }
    for path in &args.fonts {
        lib.load_font_file(path)?;
    }
    if lib.is_empty() {
        anyhow::bail!("no fonts available; pass --font or --font-dir, or set {FONT_DIR_ENV}");
    }
    tracing::debug!(faces = lib.len(), "font library ready");
    Ok(lib)
}

fn output_path(out: &Path, category: Category) -> PathBuf {
    if out.is_dir() || out.as_os_str().to_string_lossy().ends_with('/') {
        out.join(category.download_file_name())
    } else {
        out.to_path_buf()
    }
}
