//! Reference vector replay and cross-model properties.
//!
//! The rows below were computed for this crate from the published P.2108
//! equations and the reference library's validation rules. They are not the
//! upstream ITS test vector files, which are not distributed with this crate.

use approx::assert_abs_diff_eq;

use super::*;

/// Absolute tolerance when checking model outputs against reference rows.
const ABSTOL_DB: f64 = 0.1;

/// Columns: f__ghz, theta__deg, p, return code, L_ces__db
const AERONAUTICAL_ROWS: &str = "\
20,30,50,0,4.5921
10,10.5,45,0,12.3754
10,1,1,0,2.0962
30,45,10,0,0.2586
50,60,99,0,3.1861
100,45,1,0,-1.2083
70,89,50,0,0.0046
20,90,50,0,0.0000
20,0,50,72,45.6475
20,95,50,73,0.0000
9,30,50,64,0
20,-5,50,65,0
20,30,0,66,0
20,30,100,66,0";

/// Columns: f__ghz, d__km, p, return code, L_ctt__db
const TERRESTRIAL_ROWS: &str = "\
3,1,50,0,29.5103
0.5,0.25,90,0,24.8341
2,0.5,10,0,18.8482
10,1,1,0,22.0574
20,3,50,0,32.9841
67,5,50,0,32.9936
30,100,99,0,42.3068
3,0.1,50,56,10.5111
3,0.249,50,56,19.9565
0.4,1,50,48,0
3,0,50,49,0
3,1,0,50,0
3,1,100,50,0";

/// Columns: f__ghz, h__meter, w_s__meter, R__meter, clutter_type, return code, A_h__db
const HEIGHT_GAIN_ROWS: &str = "\
0.2,7,20,10,4,0,6.3510
1.5,2,27,15,4,0,24.4961
1.5,2,27,15,2,0,20.0317
0.03,1,10,10,1,0,12.3582
3,1,27,10,2,0,24.7582
0.9,5,15,20,6,0,25.3341
2,3,30,15,5,0,24.6825
0.1,9,27,10,3,0,1.3692
4,2,27,15,4,32,0
1.5,0,27,15,4,33,0
1.5,2,0,15,4,34,0
1.5,2,27,0,4,35,0
1.5,2,27,15,7,36,0
1.5,16,27,15,4,37,0";

fn parse_rows(rows: &str) -> Vec<Vec<f64>> {
    rows.lines()
        .map(|line| {
            line.split(',')
                .map(|field| field.trim().parse().unwrap())
                .collect()
        })
        .collect()
}

/// Check a model result against the expected return code and loss.
fn check_row(result: Result<ClutterLoss, ClutterError>, rtn: f64, expected_db: f64) {
    let rtn = rtn as i32;
    match result {
        Ok(loss) => {
            assert_eq!(loss.return_code(), rtn, "unexpected status {:?}", loss.status);
            assert_abs_diff_eq!(loss.loss_db, expected_db, epsilon = ABSTOL_DB);
        }
        Err(e) => assert_eq!(e.code(), rtn, "unexpected error: {e}"),
    }
}

#[test]
fn aeronautical_reference_rows() {
    let rows = parse_rows(AERONAUTICAL_ROWS);
    assert!(!rows.is_empty());
    for row in rows {
        check_row(
            aeronautical_statistical_model(row[0], row[1], row[2]),
            row[3],
            row[4],
        );
    }
}

#[test]
fn terrestrial_reference_rows() {
    let rows = parse_rows(TERRESTRIAL_ROWS);
    assert!(!rows.is_empty());
    for row in rows {
        check_row(
            terrestrial_statistical_model(row[0], row[1], row[2]),
            row[3],
            row[4],
        );
    }
}

#[test]
fn height_gain_reference_rows() {
    let rows = parse_rows(HEIGHT_GAIN_ROWS);
    assert!(!rows.is_empty());
    for row in rows {
        let result = ClutterType::try_from(row[4] as i32).and_then(|clutter_type| {
            height_gain_terminal_correction_model(row[0], row[1], row[2], row[3], clutter_type)
        });
        check_row(result, row[5], row[6]);
    }
}

#[test]
fn inverse_ccdf_values() {
    assert_abs_diff_eq!(inverse_ccdf(0.01).unwrap(), 2.3267853325589658, epsilon = 1e-12);
    assert_abs_diff_eq!(inverse_ccdf(0.49).unwrap(), 0.024998347218995187, epsilon = 1e-12);
    assert_abs_diff_eq!(inverse_ccdf(0.51).unwrap(), -0.024998347218995187, epsilon = 1e-12);
    assert_abs_diff_eq!(inverse_ccdf(0.99).unwrap(), -2.3267853325589658, epsilon = 1e-12);
}

#[test]
fn inverse_ccdf_rejects_bounds() {
    for q in [-1.0, 0.0, 1.0, 1.1, f64::NAN] {
        assert_eq!(inverse_ccdf(q), Err(ClutterError::Probability));
    }
}

#[test]
fn height_gain_succeeds_for_every_clutter_type() {
    for clutter_type in ClutterType::ALL {
        let r_m = clutter_type.representative_clutter_height_m();
        let result = height_gain_terminal_correction_model(
            1.0,
            r_m / 2.0,
            DEFAULT_STREET_WIDTH_M,
            r_m,
            clutter_type,
        )
        .unwrap();
        assert_eq!(result.status, Status::Success);
        assert!(result.loss_db.is_finite());
    }
}

#[test]
fn height_gain_is_monotonic() {
    for clutter_type in ClutterType::ALL {
        let r_m = 20.0;
        let losses: Vec<f64> = (1..20)
            .map(|h| {
                height_gain_terminal_correction_model(0.9, f64::from(h), 27.0, r_m, clutter_type)
                    .unwrap()
                    .loss_db
            })
            .collect();
        for pair in losses.windows(2) {
            assert!(
                pair[1] < pair[0],
                "{clutter_type} loss did not fall with height: {pair:?}"
            );
        }
    }
}

#[test]
fn models_are_deterministic() {
    let first = (
        aeronautical_statistical_model(20.0, 30.0, 50.0),
        terrestrial_statistical_model(3.0, 1.0, 50.0),
        height_gain_terminal_correction_model(0.2, 7.0, 20.0, 10.0, ClutterType::Urban),
    );
    for _ in 0..10 {
        let again = (
            aeronautical_statistical_model(20.0, 30.0, 50.0),
            terrestrial_statistical_model(3.0, 1.0, 50.0),
            height_gain_terminal_correction_model(0.2, 7.0, 20.0, 10.0, ClutterType::Urban),
        );
        assert_eq!(first, again);
    }
}

#[test]
fn percentage_bounds_are_errors() {
    for p in [0.0, 100.0] {
        assert_eq!(
            aeronautical_statistical_model(20.0, 30.0, p),
            Err(ClutterError::AeronauticalPercentage)
        );
        assert_eq!(
            terrestrial_statistical_model(3.0, 1.0, p),
            Err(ClutterError::TerrestrialPercentage)
        );
    }
}

#[test]
fn clutter_type_codes() {
    for (code, clutter_type) in (1..=6).zip(ClutterType::ALL) {
        assert_eq!(ClutterType::try_from(code), Ok(clutter_type));
        assert_eq!(clutter_type.code(), code);
    }
    for code in [0, 7, -1] {
        assert_eq!(ClutterType::try_from(code), Err(ClutterError::ClutterType));
    }
    assert_eq!(ClutterType::DenseUrban.to_string(), "Dense urban");
}

#[test]
fn default_clutter_heights() {
    let heights = ClutterType::ALL.map(ClutterType::representative_clutter_height_m);
    assert_eq!(heights, [10.0, 10.0, 10.0, 15.0, 15.0, 20.0]);
}
