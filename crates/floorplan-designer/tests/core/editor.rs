use floorplan_core::LayoutConfig;
use floorplan_designer::editor::{FloorPlanEditor, Tool};
use floorplan_designer::model::{Door, Orientation, Point, Room, RoomDraft};

#[test]
fn test_drag_commits_snapped_room() {
    let mut editor = FloorPlanEditor::new();
    editor.pointer_down(Point::new(5.0, 5.0));
    assert_eq!(editor.draft(), Some(&RoomDraft::new(0.0, 0.0, 0.0, 0.0)));

    editor.pointer_move(Point::new(205.0, 105.0));
    assert_eq!(editor.draft(), Some(&RoomDraft::new(0.0, 0.0, 200.0, 100.0)));

    let room = editor.pointer_up();
    assert_eq!(room, Some(Room::new(0.0, 0.0, 200.0, 100.0)));
    assert!(!editor.is_drawing());
    assert_eq!(editor.layout().rooms(), &[Room::new(0.0, 0.0, 200.0, 100.0)]);
}

#[test]
fn test_halfway_coordinates_round_up() {
    // 210 / 20 and 110 / 20 sit exactly halfway between grid lines.
    let editor = FloorPlanEditor::new();
    let anchor = editor.begin_room(Point::new(5.0, 5.0));
    let draft = editor.update_room(anchor, Point::new(210.0, 110.0));
    assert_eq!(draft, RoomDraft::new(0.0, 0.0, 220.0, 120.0));
}

#[test]
fn test_small_drag_rejected() {
    let mut editor = FloorPlanEditor::new();
    editor.pointer_down(Point::new(5.0, 5.0));
    editor.pointer_move(Point::new(15.0, 15.0));
    assert_eq!(editor.draft(), Some(&RoomDraft::new(0.0, 0.0, 20.0, 20.0)));
    assert_eq!(editor.pointer_up(), None);
    assert!(editor.layout().is_empty());
    assert!(!editor.is_drawing());
}

#[test]
fn test_commit_room_reports_outcome() {
    let mut editor = FloorPlanEditor::new();
    assert!(!editor.commit_room(RoomDraft::new(0.0, 0.0, 20.0, 100.0)));
    assert!(editor.commit_room(RoomDraft::new(0.0, 0.0, 40.0, -100.0)));
    assert_eq!(editor.layout().rooms()[0], Room::new(0.0, -100.0, 40.0, 100.0));
}

#[test]
fn test_drag_up_left_normalises() {
    let mut editor = FloorPlanEditor::new();
    editor.pointer_down(Point::new(200.0, 100.0));
    editor.pointer_move(Point::new(0.0, 0.0));
    assert_eq!(
        editor.draft(),
        Some(&RoomDraft::new(200.0, 100.0, -200.0, -100.0))
    );
    assert_eq!(
        editor.pointer_leave(),
        Some(Room::new(0.0, 0.0, 200.0, 100.0))
    );
}

#[test]
fn test_new_room_snaps_to_existing_corner() {
    let mut config = LayoutConfig::default();
    config.grid_size = 50.0;
    config.wall_intersection_tolerance = 25.0;
    let mut editor = FloorPlanEditor::with_config(config);
    assert!(editor.commit_room(RoomDraft::new(0.0, 0.0, 130.0, 70.0)));

    // (138, 64) is within 15 of corner (130, 70); grid snap would give (150, 50).
    let anchor = editor.begin_room(Point::new(138.0, 64.0));
    assert_eq!(anchor, Point::new(130.0, 70.0));

    let draft = editor.update_room(anchor, Point::new(240.0, 260.0));
    assert_eq!(draft, RoomDraft::new(130.0, 70.0, 120.0, 180.0));
}

#[test]
fn test_move_and_up_without_drag_ignored() {
    let mut editor = FloorPlanEditor::new();
    editor.pointer_move(Point::new(100.0, 100.0));
    assert!(editor.draft().is_none());
    assert_eq!(editor.pointer_up(), None);
    assert!(editor.layout().is_empty());
}

#[test]
fn test_door_tool_ignores_drag() {
    let mut editor = FloorPlanEditor::new();
    editor.set_tool(Tool::Door);
    editor.pointer_down(Point::new(5.0, 5.0));
    editor.pointer_move(Point::new(205.0, 105.0));
    assert!(!editor.is_drawing());
    assert_eq!(editor.pointer_up(), None);
    assert_eq!(editor.layout().room_count(), 0);
}

#[test]
fn test_click_places_door_only_with_door_tool() {
    let mut editor = FloorPlanEditor::new();
    assert!(editor.commit_room(RoomDraft::new(0.0, 0.0, 200.0, 100.0)));

    assert_eq!(editor.click(Point::new(100.0, 2.0)), None);
    assert_eq!(editor.layout().door_count(), 0);

    editor.set_tool(Tool::Door);
    assert_eq!(
        editor.click(Point::new(100.0, 2.0)),
        Some(Door::new(100.0, 0.0, Orientation::Horizontal))
    );
    assert_eq!(editor.click(Point::new(100.0, 50.0)), None);
    assert_eq!(editor.layout().door_count(), 1);
}

#[test]
fn test_place_door_ignores_tool() {
    let mut editor = FloorPlanEditor::new();
    assert!(editor.commit_room(RoomDraft::new(0.0, 0.0, 200.0, 100.0)));
    assert_eq!(
        editor.place_door(Point::new(2.0, 41.0)),
        Some(Door::new(0.0, 40.0, Orientation::Vertical))
    );
}

#[test]
fn test_switching_tool_abandons_draft() {
    let mut editor = FloorPlanEditor::new();
    editor.pointer_down(Point::new(0.0, 0.0));
    editor.pointer_move(Point::new(100.0, 100.0));
    editor.set_tool(Tool::Door);
    assert!(!editor.is_drawing());
    assert_eq!(editor.pointer_up(), None);
    assert!(editor.layout().is_empty());
}

#[test]
fn test_clear() {
    let mut editor = FloorPlanEditor::new();
    assert!(editor.commit_room(RoomDraft::new(0.0, 0.0, 200.0, 100.0)));
    editor.pointer_down(Point::new(0.0, 0.0));
    editor.clear();
    assert!(editor.layout().is_empty());
    assert!(!editor.is_drawing());
}
