use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use planlens::cad::{CadSession, DrawingSettings, ElementSummary, JobStatus};
use planlens::client::{DEFAULT_GENERATOR_URL, DetectorClient, ImageGenerator};
use planlens::overlay::{self, OverlayMode};
use planlens::session::AnalysisSession;

#[derive(Parser)]
#[command(name = "planlens")]
#[command(about = "Analyze floor-plan images and generate CAD-style drawings")]
struct Cli {
    /// Path to the floor-plan image
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Base URL of the detection service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    detector_url: String,

    /// Base URL of the image-generation service
    #[arg(long, default_value = DEFAULT_GENERATOR_URL)]
    generator_url: String,

    /// Overlay to render: original, detections or rooms
    #[arg(long, default_value = "detections")]
    mode: OverlayMode,

    /// Output directory for rendered images
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Also run the CAD drawing pipeline
    #[arg(long)]
    cad: bool,

    /// Wall height in millimeters for elevation prompts
    #[arg(long, default_value_t = 2700)]
    wall_height: u32,

    /// Skip door elevations
    #[arg(long)]
    no_doors: bool,

    /// Skip window elevations
    #[arg(long)]
    no_windows: bool,

    /// Skip the bed head elevation
    #[arg(long)]
    no_beds: bool,

    /// Print the object-count histogram as CSV
    #[arg(long)]
    csv: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose { "planlens=debug" } else { "planlens=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
    let image_bytes = std::fs::read(&args.image_path)?;
    let filename = args
        .image_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "floor-plan.png".to_string());

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    // Analyze
    let detector = DetectorClient::new(&args.detector_url);
    let mut session = AnalysisSession::new();
    session.analyze(&detector, image_bytes, &filename).await;

    let analysis = match session.analysis() {
        Some(analysis) => analysis,
        None => {
            let message = session.error().unwrap_or("analysis failed");
            anyhow::bail!("Analysis failed: {message}");
        }
    };

    // Print summary
    println!("=== Floor Plan Analysis ===");
    println!("Objects detected: {}", analysis.total_objects());
    println!("Rooms found: {}", analysis.rooms.len());
    println!(
        "Total area: {} px²",
        analysis.total_room_area().round() as i64
    );

    if !analysis.object_counts.is_empty() {
        println!("\nDetected objects:");
        for (label, count) in &analysis.object_counts {
            println!("  {label}: {count}");
        }
    }

    if !analysis.rooms.is_empty() && args.verbose {
        println!("\nRooms:");
        for room in &analysis.rooms {
            println!(
                "  Room {} - {} px² at ({:.0}, {:.0})",
                room.id,
                room.area.round() as i64,
                room.bbox.x1,
                room.bbox.y1
            );
        }
    }

    if args.csv {
        println!("\n{}", analysis.counts_csv());
    }

    // Render the requested overlay
    std::fs::create_dir_all(&args.out)?;
    let canvas = overlay::render(args.mode, &img, analysis);
    let overlay_path = args.out.join(format!("floor-plan-{}.png", args.mode));
    canvas
        .save(&overlay_path)
        .map_err(|e| anyhow::anyhow!("Failed to save overlay: {}", e))?;
    println!("\nSaved overlay: {}", overlay_path.display());

    // Optionally run the CAD pipeline
    if args.cad {
        let settings = DrawingSettings {
            wall_height_mm: args.wall_height,
            include_doors: !args.no_doors,
            include_windows: !args.no_windows,
            include_bed_heads: !args.no_beds,
        };
        let summary = ElementSummary::from_detections(&analysis.detections);
        let generator = ImageGenerator::new(&args.generator_url);

        println!("\n=== CAD Drawing Generation ===");
        let mut cad = CadSession::new();
        let completed = cad.generate(&generator, &settings, &summary).await;
        println!("Completed {}/{} drawings", completed, cad.jobs().len());

        for job in cad.jobs() {
            match &job.status {
                JobStatus::Done(_) => {
                    let path = CadSession::export_job(job, &args.out)?;
                    println!("  {} -> {}", job.kind.display_name(), path.display());
                }
                JobStatus::Failed(message) => {
                    println!("  {} failed: {}", job.kind.display_name(), message);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
