use odonto_chart::topology::{self, Dentition, QuadrantId, ToothNumber};
use odonto_chart::ChartError;

#[test]
fn quadrant_tables_partition_standard_numbers() {
    assert_eq!(topology::validate(), Ok(()));
}

#[test]
fn quadrants_are_in_display_order() {
    let ids: Vec<_> = topology::quadrants().iter().map(|q| q.id).collect();
    assert_eq!(
        ids,
        vec![
            QuadrantId::UpperRight,
            QuadrantId::UpperLeft,
            QuadrantId::LowerLeft,
            QuadrantId::LowerRight,
        ]
    );
    let upper_right = &topology::quadrants()[0];
    assert_eq!(upper_right.permanent, [18, 17, 16, 15, 14, 13, 12, 11]);
    assert_eq!(upper_right.deciduous, [55, 54, 53, 52, 51]);
}

#[test]
fn all_teeth_is_fifty_two_ascending() {
    let teeth = topology::all_teeth();
    assert_eq!(teeth.len(), 52);
    assert!(teeth.windows(2).all(|w| w[0].get() < w[1].get()));
    assert_eq!(teeth.iter().filter(|t| t.is_deciduous()).count(), 20);
}

#[test]
fn deciduous_membership_is_by_lookup() {
    assert!(topology::is_deciduous(55));
    assert!(topology::is_deciduous(81));
    assert!(!topology::is_deciduous(16));
    assert!(!topology::is_deciduous(56));
    assert!(!topology::is_deciduous(0));
}

#[test]
fn tooth_number_rejects_numbers_outside_the_chart() {
    assert_eq!(ToothNumber::new(19), Err(ChartError::UnknownTooth(19)));
    assert_eq!(ToothNumber::new(86), Err(ChartError::UnknownTooth(86)));

    let tooth = ToothNumber::new(64).unwrap();
    assert_eq!(tooth.get(), 64);
    assert_eq!(tooth.dentition(), Dentition::Deciduous);
    assert_eq!(tooth.to_string(), "64");
}

#[test]
fn tooth_numbers_order_by_number_across_dentitions() {
    let t48 = ToothNumber::new(48).unwrap();
    let t51 = ToothNumber::new(51).unwrap();
    let t85 = ToothNumber::new(85).unwrap();
    assert!(t48 < t51);
    assert!(t51 < t85);
    assert!(Dentition::Permanent < Dentition::Deciduous);

    let mut shuffled = vec![t85, t48, t51];
    shuffled.sort();
    assert_eq!(shuffled, [t48, t51, t85]);
}
