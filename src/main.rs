use std::env;
use std::io::Write;

use geoframe::{FrameConfig, GeoPoint, Result};
use log::LevelFilter;

fn init_logging() {
    let level = env::var("RUST_LOG").ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    println!("geoframe - WGS84 to local planar frame\n");

    let config = match env::args().nth(1) {
        Some(path) => {
            log::info!("Loading frame configuration from {}", path);
            FrameConfig::from_path(path)?
        }
        None => FrameConfig::new(GeoPoint::new(121.5750212, 25.0783615)),
    };

    let mut frame = config.build_frame()?;
    let origin = config.origin;
    println!("Origin: lon={}, lat={}", origin.longitude, origin.latitude);

    let offsets = [
        ("origin", 0.0, 0.0),
        ("north", 0.0, 0.0023),
        ("east", 0.0025, 0.0),
        ("south-west", -0.01, -0.01),
    ];

    for (name, dlon, dlat) in offsets {
        let point = GeoPoint::new(origin.longitude + dlon, origin.latitude + dlat);
        println!("\n   {} (lon={}, lat={})", name, point.longitude, point.latitude);

        match frame.to_cartesian_point(point) {
            Ok(planar) => {
                println!("     Planar: x={:.4} m, y={:.4} m ({:.2} m from origin)",
                    planar.x, planar.y, planar.distance_from_origin());

                match frame.from_cartesian(planar) {
                    Ok(back) => println!("     Back:   lon={:.9}, lat={:.9}", back.longitude, back.latitude),
                    Err(e) => println!("     Inverse error: {}", e),
                }
            }
            Err(e) => println!("     Transformation error: {}", e),
        }
    }

    if let Some(shift) = frame.origin().vertical_shift() {
        println!("\nVertical shift: {:.4} m", shift);
    }

    Ok(())
}
