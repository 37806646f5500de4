use slm_domain::defines::{Define, SiteLogStatus};

const TERMINAL: [SiteLogStatus; 3] =
    [SiteLogStatus::Published, SiteLogStatus::Updated, SiteLogStatus::Empty];

#[test]
fn merge_picks_the_lower_value_both_ways() {
    for a in SiteLogStatus::ALL.iter().copied() {
        for b in SiteLogStatus::ALL.iter().copied() {
            let winner = if b.value() < a.value() { b } else { a };
            assert_eq!(a.merge(Some(b)), winner);
            if a.value() != b.value() {
                assert_eq!(a.merge(Some(b)), b.merge(Some(a)));
            }
        }
    }
}

#[test]
fn merge_with_absent_sibling_is_identity() {
    for status in SiteLogStatus::ALL.iter().copied() {
        assert_eq!(status.merge(None), status);
    }
}

#[test]
fn merge_tie_resolves_to_self() {
    for status in SiteLogStatus::ALL.iter().copied() {
        assert_eq!(status.merge(Some(status)), status);
    }
}

#[test]
fn set_on_terminal_parents_adopts_the_child() {
    for parent in TERMINAL {
        for child in SiteLogStatus::ALL.iter().copied() {
            assert_eq!(parent.set(child), child);
        }
    }
}

#[test]
fn set_on_other_parents_falls_back_to_merge() {
    for parent in [SiteLogStatus::Dormant, SiteLogStatus::Pending] {
        for child in SiteLogStatus::ALL.iter().copied() {
            assert_eq!(parent.set(child), parent.merge(Some(child)));
        }
    }

    // The priority guard in one concrete shape: a pending site stays pending
    // against later sections, but a dormant marker beats even that.
    assert_eq!(SiteLogStatus::Pending.merge(Some(SiteLogStatus::Dormant)), SiteLogStatus::Dormant);
    assert_eq!(SiteLogStatus::Published.set(SiteLogStatus::Pending), SiteLogStatus::Pending);
    assert_eq!(SiteLogStatus::Dormant.set(SiteLogStatus::Pending), SiteLogStatus::Dormant);
}

#[test]
fn merge_all_folds_like_sequential_merges() {
    let sections = [
        SiteLogStatus::Published,
        SiteLogStatus::Updated,
        SiteLogStatus::Empty,
        SiteLogStatus::Published,
    ];

    let folded = SiteLogStatus::Published.merge_all(sections);
    let sequential = sections
        .into_iter()
        .fold(SiteLogStatus::Published, |status, sibling| status.merge(Some(sibling)));

    assert_eq!(folded, sequential);
    assert_eq!(folded, SiteLogStatus::Updated);

    assert_eq!(SiteLogStatus::Empty.merge_all([]), SiteLogStatus::Empty);
}

#[test]
fn site_rollup_starts_published_and_degrades_with_sections() {
    // A site whose sections are all published stays published; one edited
    // section drags the whole site log to updated.
    let clean = [SiteLogStatus::from_published(true), SiteLogStatus::from_published(true)];
    assert_eq!(SiteLogStatus::Published.merge_all(clean), SiteLogStatus::Published);

    let edited = [SiteLogStatus::from_published(true), SiteLogStatus::from_published(false)];
    assert_eq!(SiteLogStatus::Published.merge_all(edited), SiteLogStatus::Updated);

    // Section listings seed headings with Empty so any real section wins.
    assert_eq!(
        SiteLogStatus::Empty.merge(Some(SiteLogStatus::from_published(true))),
        SiteLogStatus::Published
    );
}

#[test]
fn state_groups_match_the_platform_rules() {
    assert_eq!(
        SiteLogStatus::active_states(),
        &[SiteLogStatus::Updated, SiteLogStatus::Published]
    );
    assert_eq!(
        SiteLogStatus::unpublished_states(),
        &[SiteLogStatus::Pending, SiteLogStatus::Updated, SiteLogStatus::Empty]
    );

    assert!(!SiteLogStatus::unpublished_states().contains(&SiteLogStatus::Published));
    assert!(!SiteLogStatus::active_states().contains(&SiteLogStatus::Dormant));
}
