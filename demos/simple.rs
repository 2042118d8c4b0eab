//! A simple example of library use: draw a small weighted graph as SVG on stdout.
//!
//! Run with: cargo run --example simple > graph.svg

use circle_graph::{CircleGraph, SvgCanvas, WeightMatrix};

fn main() -> circle_graph::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    const SZ: u32 = 400;
    let graph = WeightMatrix::new(vec![
        vec![0., 4., 0., 7., 1.],
        vec![4., 0., 2., 0., 0.],
        vec![0., 2., 0., 3., 9.],
        vec![7., 0., 3., 0., 5.],
        vec![1., 0., 9., 5., 0.],
    ])?;

    let mut renderer = CircleGraph::new(&graph);
    renderer.set_size(SZ, SZ);
    renderer.set_vertex_size(36);
    renderer.set_thickness(2);

    let mut canvas = SvgCanvas::new(SZ, SZ);
    renderer.paint(&mut canvas);
    print!("{}", canvas.finish());
    Ok(())
}
