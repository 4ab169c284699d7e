//! Probe-cost comparison between linear probing and separate chaining.
//!
//! Fills one table per strategy at a ladder of load factors with random
//! keys, using the same slot formulas as the library defaults, and records
//! how many entry inspections each insert needs. Results are printed to
//! stdout and rendered as PNG line charts in the working directory.
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use plotters::prelude::*;
use rand::Rng;

const TABLE_SIZE: usize = 100_003;
const NUM_LOAD_FACTORS: usize = 10;
const STRATEGIES: [&str; 2] = ["Linear Probing", "Separate Chaining"];

fn probe_slot(key: usize) -> usize {
    key % TABLE_SIZE
}

fn chain_slot(key: usize) -> usize {
    (key * 3 + 2) % TABLE_SIZE
}

/// Inserts into the probing table and returns the slots inspected
fn probe_insert(slots: &mut [Option<usize>], key: usize) -> usize {
    let origin = probe_slot(key);
    let mut index = origin;
    let mut inspected = 1;
    while slots[index].is_some() {
        index = (index + 1) % TABLE_SIZE;
        inspected += 1;
        if index == origin {
            // Saturated table, nothing stored
            return inspected;
        }
    }
    slots[index] = Some(key);
    inspected
}

/// Inserts into the chained table and returns the nodes inspected
fn chain_insert(buckets: &mut [Vec<usize>], key: usize) -> usize {
    let bucket = &mut buckets[chain_slot(key)];
    let inspected = bucket.len() + 1;
    bucket.push(key);
    inspected
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[Vec<f64>],
    x_labels: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220)];
    let max_y = series.iter().flat_map(|v| v.iter()).fold(0.0_f64, |max, &y| y.max(max)) * 1.1;
    let points = x_labels.len();

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..points.saturating_sub(1), 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(points)
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    for (index, name) in STRATEGIES.iter().enumerate() {
        let color = colors[index % colors.len()];
        let style = ShapeStyle::from(&color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                series[index].iter().enumerate().map(|(x, &y)| (x, y)),
                style,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart.draw_series(
            series[index]
                .iter()
                .enumerate()
                .map(|(x, &y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Table size: {TABLE_SIZE}");
    println!("Load factors: {load_factors:?}");

    // One shared key corpus so both strategies see identical input
    let mut rng = rand::rng();
    let max_keys = *num_keys.iter().max().unwrap();
    let keys: Vec<usize> = (0..max_keys).map(|_| rng.random_range(1..10_000_000)).collect();

    let mut average: Vec<Vec<f64>> = vec![Vec::new(); STRATEGIES.len()];
    let mut worst: Vec<Vec<f64>> = vec![Vec::new(); STRATEGIES.len()];

    for &n_keys in &num_keys {
        println!("Inserting {n_keys} keys");
        let mut slots: Vec<Option<usize>> = vec![None; TABLE_SIZE];
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); TABLE_SIZE];

        let mut probe_counts = Vec::with_capacity(n_keys);
        let mut chain_counts = Vec::with_capacity(n_keys);
        for &key in keys.iter().take(n_keys) {
            probe_counts.push(probe_insert(&mut slots, key));
            chain_counts.push(chain_insert(&mut buckets, key));
        }

        for (index, counts) in [&probe_counts, &chain_counts].into_iter().enumerate() {
            let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            let peak = *counts.iter().max().unwrap_or(&0);
            average[index].push(avg);
            worst[index].push(peak as f64);
            println!("  {}: avg inspections = {avg:.2}, worst = {peak}", STRATEGIES[index]);
        }
    }

    let x_labels: Vec<String> = num_keys.iter().map(ToString::to_string).collect();
    draw_chart(
        "average_inspections.png",
        "Average Inspections per Insert",
        "Average Inspections",
        &average,
        &x_labels,
    )?;
    draw_chart(
        "worst_case_inspections.png",
        "Worst-Case Inspections per Insert",
        "Worst-Case Inspections",
        &worst,
        &x_labels,
    )?;

    println!(
        "Generated chart images: average_inspections.png, worst_case_inspections.png"
    );

    Ok(())
}
