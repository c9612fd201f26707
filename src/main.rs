/*

    Prints the bounding box of the 3D points given on the command line.

    Usage: bbox <x,y,z> [<x,y,z> ...]

    @date: 19 Oct, 2026

*/

use std::{env, error::Error};
use tracing::{info, warn, error, debug};

use bvh_box::bbox::BBox3;
use bvh_box::numeric::{Float, Vector3};

fn parse_point(arg: &str) -> Result<Vector3, Box<dyn Error>> {
    let coords = arg
        .split(',')
        .map(|c| c.trim().parse::<Float>())
        .collect::<Result<Vec<Float>, _>>()?;

    match coords.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("Expected 3 comma separated coordinates, got '{}'", arg).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().skip(1).collect();
    let points: Vec<Vector3> = if args.is_empty() {
        warn!("No points were provided, using the demo cube (0,0,0) (2,2,2)...");
        vec![Vector3::ZERO, Vector3::splat(2.0)]
    } else {
        args.iter()
            .map(|arg| parse_point(arg))
            .collect::<Result<_, _>>()
            .map_err(|e| {
                error!("Failed to parse points: {}", e);
                e
            })?
    };
    debug!("Parsed {} points", points.len());

    let bbox: BBox3 = points.into_iter().collect();

    info!("valid:  {}", bbox.is_valid());
    info!("min:    {}", bbox.corner_min());
    info!("max:    {}", bbox.corner_max());
    info!("size:   {}", bbox.size());
    info!("center: {}", bbox.center());
    info!("area:   {}", bbox.area());
    Ok(())
}
