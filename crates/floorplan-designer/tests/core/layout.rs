use floorplan_designer::layout::Layout;
use floorplan_designer::model::{Door, Orientation, Point, Room, RoomDraft};

#[test]
fn test_layout_append_only_views() {
    let mut layout = Layout::new();
    assert!(layout.is_empty());

    let room = layout
        .add_room(RoomDraft::new(0.0, 0.0, 200.0, 100.0), 20.0)
        .unwrap();
    layout.add_door(Door::new(100.0, 0.0, Orientation::Horizontal));

    assert_eq!(layout.room_count(), 1);
    assert_eq!(layout.door_count(), 1);
    assert_eq!(layout.rooms(), &[room]);
    assert_eq!(layout.doors()[0].position(), Point::new(100.0, 0.0));
}

#[test]
fn test_add_room_threshold_is_exclusive() {
    let mut layout = Layout::new();
    assert!(layout
        .add_room(RoomDraft::new(0.0, 0.0, 20.0, 40.0), 20.0)
        .is_none());
    assert!(layout
        .add_room(RoomDraft::new(0.0, 0.0, -40.0, -20.0), 20.0)
        .is_none());
    assert_eq!(
        layout.add_room(RoomDraft::new(0.0, 0.0, -40.0, -21.0), 20.0),
        Some(Room::new(-40.0, -21.0, 40.0, 21.0))
    );
    assert_eq!(layout.room_count(), 1);
}

#[test]
fn test_add_room_with_zero_min_extent() {
    let mut layout = Layout::new();
    assert!(layout
        .add_room(RoomDraft::new(0.0, 0.0, 0.0, 5.0), 0.0)
        .is_none());
    assert!(layout
        .add_room(RoomDraft::new(0.0, 0.0, 5.0, 0.0), -1.0)
        .is_none());
    assert_eq!(
        layout.add_room(RoomDraft::new(0.0, 0.0, 5.0, 5.0), 0.0),
        Some(Room::new(0.0, 0.0, 5.0, 5.0))
    );
}

#[test]
fn test_doors_not_revalidated() {
    // Doors are appended as given, whether or not they touch a wall.
    let mut layout = Layout::new();
    layout.add_door(Door::new(500.0, 500.0, Orientation::Vertical));
    assert_eq!(layout.door_count(), 1);
    assert!(layout.drawable_walls(40.0).is_empty());
}

#[test]
fn test_snap_points_follow_rooms() {
    let mut layout = Layout::new();
    assert!(layout.snap_points().is_empty());
    layout.add_room(RoomDraft::new(0.0, 0.0, 200.0, 100.0), 20.0);
    layout.add_room(RoomDraft::new(200.0, 0.0, 100.0, 100.0), 20.0);

    let points = layout.snap_points();
    assert_eq!(points.len(), 8);
    assert_eq!(points[3], Point::new(200.0, 100.0));
    assert_eq!(points[5], Point::new(300.0, 0.0));
}
