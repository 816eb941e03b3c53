use glam::DVec2;
use tactical_plotting::{
    DrawAction, DrawSession, EditController, EditEvent, EditPhase, EventLog, FeatureRef,
    FeatureState, MemoryLayer, PlottingHost, PlottingOptions, VariantKind,
};

fn p(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

/// Zeichnet einen Pfeil per Klick-Folge und legt ihn auf den Layer.
fn draw_arrow(layer: &mut MemoryLayer, options: &PlottingOptions) -> u64 {
    let mut draw = DrawSession::new(VariantKind::DiagonalArrow.default_variant(options));
    for pixel in [p(0.0, 0.0), p(60.0, -30.0), p(120.0, 0.0)] {
        assert_eq!(
            draw.on_click(layer.pixel_to_map(pixel)),
            DrawAction::Continue
        );
    }
    // Doppelklick
    draw.on_click(layer.pixel_to_map(p(120.0, 0.0)));
    let symbol = draw.finish().expect("Pfeil mit drei Punkten vorhanden");
    assert_eq!(symbol.state(), FeatureState::Insert);
    layer.add_symbol(symbol)
}

#[test]
fn test_draw_pick_drag_and_unselect_flow() {
    let options = PlottingOptions::default();
    let mut layer = MemoryLayer::new(&options);
    let mut controller = EditController::new(EventLog::new());
    let id = draw_arrow(&mut layer, &options);
    assert_eq!(layer.symbol(id).map(|s| s.control_points().len()), Some(3));

    // Klick auf den Schaft selektiert und startet einen Körper-Drag
    let body = layer.feature_at(p(60.0, -30.0));
    assert_eq!(body, Some(FeatureRef::Symbol(id)));
    assert!(controller.drag_start(&mut layer, FeatureRef::Symbol(id), p(60.0, -30.0)));
    controller.drag_move(&mut layer, p(70.0, -40.0));
    controller.drag_complete(&mut layer);
    assert_eq!(
        layer.symbol(id).map(|s| s.control_points()[0]),
        Some(p(10.0, 10.0))
    );

    // Proxy unter dem Zeiger greifen und ziehen
    let tip_pixel = layer.map_to_pixel(p(130.0, 10.0));
    let target = layer
        .feature_at(tip_pixel)
        .expect("Proxy an der Spitze vorhanden");
    assert_eq!(target, FeatureRef::ControlPoint(2));
    assert!(controller.drag_start(&mut layer, target, tip_pixel));
    controller.drag_move(&mut layer, tip_pixel + p(5.0, 0.0));
    controller.drag_complete(&mut layer);

    let symbol = layer.symbol(id).expect("Pfeil vorhanden");
    assert_eq!(symbol.control_points()[2], p(135.0, 10.0));
    assert_eq!(symbol.state(), FeatureState::Insert);
    assert!(symbol.outline().points().contains(&p(135.0, 10.0)));

    controller.unselect(&mut layer);
    assert_eq!(controller.session().phase(), EditPhase::Idle);

    let kinds: Vec<&str> = controller
        .sink()
        .entries()
        .iter()
        .map(|e| match e {
            EditEvent::BeforeModified { .. } => "before",
            EditEvent::Modified { .. } => "modified",
            EditEvent::AfterModified { .. } => "after",
        })
        .collect();
    assert_eq!(kinds, vec!["before", "modified", "modified", "after"]);
    assert!(matches!(
        controller.sink().entries().last(),
        Some(EditEvent::AfterModified {
            was_modified: true,
            ..
        })
    ));
}

#[test]
fn test_scaled_view_drag_delta_in_map_units() {
    let options = PlottingOptions::default();
    let mut layer = MemoryLayer::new(&options);
    layer.set_view(p(1000.0, 2000.0), 2.0);
    let mut controller = EditController::new(EventLog::new());
    let id = draw_arrow(&mut layer, &options);
    let before = layer
        .symbol(id)
        .expect("Pfeil vorhanden")
        .control_points()
        .to_vec();

    controller.drag_start(&mut layer, FeatureRef::Symbol(id), p(60.0, 0.0));
    controller.drag_move(&mut layer, p(64.0, 3.0));
    controller.drag_complete(&mut layer);

    let after = layer.symbol(id).expect("Pfeil vorhanden").control_points();
    for (a, b) in before.iter().zip(after) {
        assert_eq!(*b - *a, p(8.0, -6.0));
    }
}

#[test]
fn test_vetoed_body_drag_does_nothing() {
    let options = PlottingOptions::default();
    let mut layer = MemoryLayer::new(&options);
    let mut controller = EditController::new(EventLog::new());
    let id = draw_arrow(&mut layer, &options);
    controller.sink_mut().set_veto(true);

    assert!(!controller.drag_start(&mut layer, FeatureRef::Symbol(id), p(60.0, 30.0)));
    controller.drag_move(&mut layer, p(90.0, 30.0));
    controller.drag_complete(&mut layer);

    assert_eq!(controller.session().phase(), EditPhase::Idle);
    assert_eq!(
        layer.symbol(id).map(|s| s.control_points()[0]),
        Some(p(0.0, 0.0))
    );
    assert_eq!(layer.symbol_redraws(), 0);
}

#[test]
fn test_delete_after_edit_reports_modified() {
    let options = PlottingOptions::default();
    let mut layer = MemoryLayer::new(&options);
    let mut controller = EditController::new(EventLog::new());
    let id = draw_arrow(&mut layer, &options);

    controller.select(&mut layer, id);
    controller.drag_start(&mut layer, FeatureRef::ControlPoint(0), p(0.0, 0.0));
    controller.drag_move(&mut layer, p(-4.0, 0.0));
    controller.drag_complete(&mut layer);

    assert!(controller.delete_active(&mut layer));
    assert!(layer.is_empty());
    assert_eq!(
        controller.sink().entries().last(),
        Some(&EditEvent::AfterModified {
            kind: VariantKind::DiagonalArrow,
            state: FeatureState::Delete,
            was_modified: true,
        })
    );
}
