use table_icon_gen::inspect::inspect;
use table_icon_gen::render::Glyph;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icons/icon128.png".to_string());

    let img = match image::open(&path) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            eprintln!("Failed to open {path}: {err}");
            std::process::exit(2);
        }
    };

    let summary = inspect(&img);

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", summary.width, summary.height);
    println!(
        "Top row color:    #{:02x}{:02x}{:02x}",
        summary.top_color[0], summary.top_color[1], summary.top_color[2]
    );
    println!(
        "Bottom row color: #{:02x}{:02x}{:02x}",
        summary.bottom_color[0], summary.bottom_color[1], summary.bottom_color[2]
    );

    let expected = match summary.glyph {
        Glyph::Grid => "grid (3 rows, 3 columns)",
        Glyph::Cross => "cross (1 row, 1 column)",
    };
    println!("\nGlyph analysis:");
    println!("  Expected {}", expected);
    println!(
        "  Found {} horizontal and {} vertical bars",
        summary.horizontal_bars, summary.vertical_bars
    );

    if summary.glyph_matches() {
        println!("✓ Glyph matches icon size");
    } else {
        println!("⚠ Glyph does not match icon size");
        std::process::exit(1);
    }
}
