use floorplan_core::LayoutConfig;
use floorplan_designer::intersection::{find_wall_intersection, WallHit};
use floorplan_designer::model::{Orientation, Point, Room};

fn room_a() -> Room {
    Room::new(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn test_click_near_top_wall() {
    let hit = find_wall_intersection(100.0, 2.0, &[room_a()], &LayoutConfig::default());
    assert_eq!(
        hit,
        Some(WallHit::new(Point::new(100.0, 0.0), Orientation::Horizontal))
    );
}

#[test]
fn test_click_snaps_along_wall() {
    let hit = find_wall_intersection(57.0, -4.0, &[room_a()], &LayoutConfig::default()).unwrap();
    assert_eq!(hit.point, Point::new(60.0, 0.0));
}

#[test]
fn test_each_side() {
    let config = LayoutConfig::default();
    let rooms = [room_a()];

    let bottom = find_wall_intersection(140.0, 103.0, &rooms, &config).unwrap();
    assert_eq!(bottom.point, Point::new(140.0, 100.0));
    assert_eq!(bottom.orientation, Orientation::Horizontal);

    let left = find_wall_intersection(-3.0, 61.0, &rooms, &config).unwrap();
    assert_eq!(left.point, Point::new(0.0, 60.0));
    assert_eq!(left.orientation, Orientation::Vertical);

    let right = find_wall_intersection(201.0, 79.0, &rooms, &config).unwrap();
    assert_eq!(right.point, Point::new(200.0, 80.0));
    assert_eq!(right.orientation, Orientation::Vertical);
}

#[test]
fn test_far_from_every_wall() {
    let config = LayoutConfig::default();
    let rooms = [room_a(), Room::new(300.0, 300.0, 100.0, 100.0)];
    assert_eq!(find_wall_intersection(100.0, 50.0, &rooms, &config), None);
    assert_eq!(find_wall_intersection(250.0, 200.0, &rooms, &config), None);
    assert_eq!(find_wall_intersection(0.0, 0.0, &[], &config), None);
}

#[test]
fn test_off_grid_room_uses_tolerance() {
    // Room edges off the grid: the snapped click must still come within the
    // tolerance, and the result is clamped onto the edge line.
    let config = LayoutConfig::default();
    let rooms = [Room::new(5.0, 5.0, 200.0, 100.0)];
    let hit = find_wall_intersection(100.0, 4.0, &rooms, &config).unwrap();
    assert_eq!(hit.point, Point::new(100.0, 5.0));

    let mut tight = config;
    tight.wall_intersection_tolerance = 5.0;
    assert_eq!(find_wall_intersection(100.0, 4.0, &rooms, &tight), None);
}

/// A corner point lies on the top and the left wall; top is tested first.
#[test]
fn test_edge_order_top_before_left() {
    let hit = find_wall_intersection(0.0, 0.0, &[room_a()], &LayoutConfig::default()).unwrap();
    assert_eq!(hit.orientation, Orientation::Horizontal);

    let hit = find_wall_intersection(0.0, 100.0, &[room_a()], &LayoutConfig::default()).unwrap();
    assert_eq!(hit.orientation, Orientation::Horizontal);
    assert_eq!(hit.point, Point::new(0.0, 100.0));
}

/// A room thin enough that both its top and bottom lines are within the
/// tolerance: the top edge is tested first and wins.
#[test]
fn test_edge_order_top_before_bottom() {
    let rooms = [Room::new(0.0, -4.0, 200.0, 8.0)];
    let hit = find_wall_intersection(100.0, 0.0, &rooms, &LayoutConfig::default()).unwrap();
    assert_eq!(hit.point, Point::new(100.0, -4.0));
}

/// Nearly coinciding walls of two rooms: the room inserted first wins.
#[test]
fn test_first_room_wins() {
    let config = LayoutConfig::default();
    let lower = Room::new(0.0, 5.0, 200.0, 100.0);
    let upper = Room::new(0.0, -95.0, 200.0, 90.0);

    let hit = find_wall_intersection(100.0, 0.0, &[lower, upper], &config).unwrap();
    assert_eq!(hit, WallHit::new(Point::new(100.0, 5.0), Orientation::Horizontal));

    let hit = find_wall_intersection(100.0, 0.0, &[upper, lower], &config).unwrap();
    assert_eq!(hit, WallHit::new(Point::new(100.0, -5.0), Orientation::Horizontal));
}
