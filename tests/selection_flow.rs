use trip_calendar::{
    Advance, CalendarConfig, CalendarDay, DateRange, StepForm, TripDraft, derive_label, derive_marked_dates,
    reconcile, trip_summary,
};

fn click(range: &DateRange, date: &str) -> DateRange {
    let day: CalendarDay = date.parse().expect("calendar reports ISO dates");
    reconcile(range, day)
}

#[test]
fn calendar_modal_session() {
    let cfg = CalendarConfig::default();

    let range = DateRange::empty();
    assert_eq!(derive_label(&range, &cfg.label), "");
    assert!(derive_marked_dates(&range, &cfg.marking).is_empty());

    let range = click(&range, "2024-03-12");
    assert_eq!(derive_label(&range, &cfg.label), "12 of Mar.");
    assert_eq!(derive_marked_dates(&range, &cfg.marking).len(), 1);

    // earlier day swaps into the start
    let range = click(&range, "2024-03-10");
    assert_eq!(range.to_string(), "2024-03-10/2024-03-12");
    assert_eq!(derive_label(&range, &cfg.label), "10 to 12 of Mar.");

    let marks = derive_marked_dates(&range, &cfg.marking).into_inner();
    assert_eq!(
        marks.keys().cloned().collect::<Vec<_>>(),
        ["2024-03-10", "2024-03-11", "2024-03-12"]
    );

    // a complete range restarts on the next click, even on its own end
    let range = click(&range, "2024-03-12");
    assert_eq!(range.to_string(), "2024-03-12/..");

    let range = click(&range, "2024-03-15");
    assert_eq!(derive_label(&range, &cfg.label), "12 to 15 of Mar.");
    assert_eq!(
        derive_marked_dates(&range, &cfg.marking).keys().cloned().collect::<Vec<_>>(),
        ["2024-03-12", "2024-03-13", "2024-03-14", "2024-03-15"]
    );
}

#[test]
fn new_trip_form_end_to_end() {
    let cfg = CalendarConfig::from_toml_str("[label]\nmonth = \"long\"\n").expect("config parses");
    let mut draft = TripDraft::new();
    draft.set_destination("Buenos Aires");

    assert!(draft.advance(StepForm::TripDetails, &cfg.limits).is_err());

    for date in ["2024-11-20", "2024-11-18"] {
        draft.select_day(date.parse().expect("valid day"));
    }
    assert_eq!(derive_label(draft.range(), &cfg.label), "18 to 20 of November.");

    let step = match draft.advance(StepForm::TripDetails, &cfg.limits) {
        Ok(Advance::Step(step)) => step,
        other => panic!("expected next step, got {other:?}"),
    };
    assert_eq!(step, StepForm::AddEmails);
    assert!(!step.details_editable());

    draft.guests_mut().add("ana@mail.com").expect("valid guest");
    assert!(draft.guests_mut().add("Ana@Mail.com").is_err());

    let Ok(Advance::Confirm(request)) = draft.advance(step, &cfg.limits) else {
        panic!("expected a confirmed trip");
    };
    assert_eq!(request.starts_at, "2024-11-18T00:00:00");
    assert_eq!(request.ends_at, "2024-11-20T00:00:00");
    assert_eq!(request.emails_to_invite, ["ana@mail.com"]);

    let starts_at = draft.range().start().expect("start set");
    let ends_at = draft.range().end().expect("end set");
    assert_eq!(
        trip_summary(&request.destination, starts_at, ends_at, &cfg),
        "Buenos Aires - from 18 to 20 November."
    );
}
