// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: f64,
}

const fn reading(sensor: &'static str, celsius: f64) -> Reading {
    Reading { sensor, celsius }
}

#[test]
fn test_moving_average_alerts() -> anyhow::Result<()> {
    // Two sensors reporting in turn
    let north = pipeline![
        reading("north", 20.0),
        reading("north", 21.0),
        reading("north", 26.0),
        reading("north", 28.0)
    ];
    let south = pipeline![reading("south", 18.0), reading("south", 19.0)];
    let readings = north.concat(south);

    // Moving average over three readings, per sensor
    let last_three = WindowConfig::sliding(3)?;
    let per_sensor = readings.group_by_flow(|r| r.sensor);
    let averages = per_sensor.flat_map(move |group| {
        let sensor = group.key;
        Pipeline::from_vec(group.value)
            .map_to(|r| r.celsius)
            .window_with(last_three)
            .map_to(move |w| (sensor, w.iter().sum::<f64>() / 3.0))
    });

    // Alert on hot averages only
    let alerts = averages.filter(|(_, avg)| *avg > 24.0).collect();

    assert_eq!(alerts, vec![("north", 25.0)]);
    Ok(())
}

#[test]
fn test_pairing_sensors_by_position() -> anyhow::Result<()> {
    let north = pipeline![reading("north", 20.0), reading("north", 22.0)];
    let south = pipeline![reading("south", 18.0), reading("south", 23.0), reading("south", 30.0)];

    let warmer: Vec<&str> = north
        .combine_with(south, |n, s| if n.celsius >= s.celsius { n.sensor } else { s.sensor })
        .collect();

    assert_eq!(warmer, vec!["north", "south"]);
    Ok(())
}
