use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::GeoCode;
use crate::constants::{LONG_MAX, LONG_MIN, STEP_MAX};
use crate::neighbors::{move_axis, neighbors, Axis, NeighborSet};

fn bits(slot: Option<GeoCode>) -> u64 {
    slot.expect("neighbor should be present").bits()
}

#[test]
fn neighbors_at_step_2() {
    // bits, north, east, west, south, north-east, south-east, north-west, south-west
    let cases: [[u64; 9]; 2] = [[6, 7, 12, 4, 3, 13, 9, 5, 1], [9, 12, 11, 3, 8, 14, 10, 6, 2]];

    for case in cases {
        let around = neighbors(GeoCode::new(case[0], 2).unwrap());
        assert_eq!(bits(around.north), case[1], "{}'s north", case[0]);
        assert_eq!(bits(around.east), case[2], "{}'s east", case[0]);
        assert_eq!(bits(around.west), case[3], "{}'s west", case[0]);
        assert_eq!(bits(around.south), case[4], "{}'s south", case[0]);
        assert_eq!(bits(around.north_east), case[5], "{}'s north-east", case[0]);
        assert_eq!(bits(around.south_east), case[6], "{}'s south-east", case[0]);
        assert_eq!(bits(around.north_west), case[7], "{}'s north-west", case[0]);
        assert_eq!(bits(around.south_west), case[8], "{}'s south-west", case[0]);
        assert_eq!(around.len(), 8);
        assert!(around.iter().all(|code| code.step() == 2));
    }
}

#[test]
fn zero_delta_is_identity() {
    let code = GeoCode::new(0b1011_0110, 4).unwrap();
    assert_eq!(move_axis(code, Axis::Latitude, 0), code);
    assert_eq!(move_axis(code, Axis::Longitude, 0), code);
}

#[test]
fn only_sign_of_delta_matters() {
    let code = GeoCode::new(6, 2).unwrap();
    assert_eq!(
        move_axis(code, Axis::Latitude, 5),
        move_axis(code, Axis::Latitude, 1)
    );
    assert_eq!(
        move_axis(code, Axis::Longitude, -3),
        move_axis(code, Axis::Longitude, -1)
    );
}

#[test]
fn opposite_moves_cancel_for_interior_codes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let step = rng.gen_range(2..=STEP_MAX);
        let cells = 1u32 << step;
        // Keep away from the grid edges.
        let lat = rng.gen_range(1..cells - 1);
        let lon = rng.gen_range(1..cells - 1);
        let code = GeoCode::new(
            crate::codec::interleave::interleave64(lat, lon),
            step,
        )
        .unwrap();

        let around = neighbors(code);
        let west = around.west.unwrap();
        let south = around.south.unwrap();
        assert_eq!(neighbors(west).east, Some(code));
        assert_eq!(neighbors(south).north, Some(code));
        assert_eq!(neighbors(around.east.unwrap()).west, Some(code));
        assert_eq!(neighbors(around.north.unwrap()).south, Some(code));
        assert_eq!(
            around.north_east,
            neighbors(around.north.unwrap()).east
        );
        assert_eq!(
            around.south_west,
            neighbors(around.south.unwrap()).west
        );
    }
}

#[test]
fn neighbors_share_an_edge_with_the_center() {
    let code = GeoCode::encode(13.4, 52.5, 12).unwrap();
    let center = code.decode();
    let around = neighbors(code);

    let north = around.north.unwrap().decode();
    assert_eq!(north.lat_min, center.lat_max);
    assert_eq!(north.lon_min, center.lon_min);

    let south = around.south.unwrap().decode();
    assert_eq!(south.lat_max, center.lat_min);

    let east = around.east.unwrap().decode();
    assert_eq!(east.lon_min, center.lon_max);
    assert_eq!(east.lat_min, center.lat_min);

    let west = around.west.unwrap().decode();
    assert_eq!(west.lon_max, center.lon_min);

    let south_west = around.south_west.unwrap().decode();
    assert_eq!(south_west.lon_max, center.lon_min);
    assert_eq!(south_west.lat_max, center.lat_min);
}

// Moving off the edge of the grid wraps to the opposite edge instead of failing. These tests pin
// that behavior down; they do not claim the wrapped cell is geographically adjacent.

#[test]
fn latitude_wraps_at_the_poles() {
    // step 2: latitude cell 3 (top row), longitude cell 0.
    let top = GeoCode::new(0b0101, 2).unwrap();
    assert_eq!(bits(neighbors(top).north), 0b0000);

    let bottom = GeoCode::new(0b0000, 2).unwrap();
    assert_eq!(bits(neighbors(bottom).south), 0b0101);
}

#[test]
fn longitude_wraps_at_the_antimeridian() {
    let west_edge = GeoCode::new(0b0000, 2).unwrap();
    assert_eq!(bits(neighbors(west_edge).west), 0b1010);

    let east_edge = GeoCode::new(0b1010, 2).unwrap();
    assert_eq!(bits(neighbors(east_edge).east), 0b0000);

    let code = GeoCode::encode(179.9, 10.0, 10).unwrap();
    let east = neighbors(code).east.unwrap().decode();
    assert_eq!(east.lon_min, LONG_MIN);
    assert_eq!(code.decode().lon_max, LONG_MAX);
    assert_eq!(east.lat_min, code.decode().lat_min);
}

#[test]
fn wrap_keeps_other_axis_and_high_bits_clear() {
    for step in [1, 7, STEP_MAX] {
        let last = (1u64 << (2 * step as u32)) - 1;
        let corner = GeoCode::new(last, step).unwrap();
        let around = neighbors(corner);
        for code in around.iter() {
            assert_eq!(code.bits() >> (2 * step as u32), 0);
            assert_eq!(code.step(), step);
        }
        assert_eq!(bits(around.north_east), 0);
    }
}

#[test]
fn pruning_removes_rows_and_columns() {
    let mut around = neighbors(GeoCode::new(6, 2).unwrap());
    around.prune_south();
    assert_eq!(around.len(), 5);
    around.prune_east();
    assert_eq!(around.len(), 3);
    assert!(around.north.is_some());
    assert!(around.west.is_some());
    assert!(around.north_west.is_some());
    around.prune_north();
    around.prune_west();
    assert!(around.is_empty());
    assert_eq!(around, NeighborSet::default());
}

#[test]
fn iter_follows_emission_order() {
    let around = neighbors(GeoCode::new(6, 2).unwrap());
    let order: Vec<u64> = around.iter().map(|code| code.bits()).collect();
    assert_eq!(order, vec![7, 12, 4, 3, 13, 9, 5, 1]);
}
