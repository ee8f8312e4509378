use chrono::{Duration, TimeZone, Utc};
use pricing_lib::{
    analyze_option, delta, gamma, price, rho, theta, vega, EngineConfig, EngineError,
    OptionContract, OptionType,
};

/// Tests put-call parity across a spread of spots, strikes, rates and vols.
/// call - put must equal S - K*exp(-rT) to high precision.
#[test]
fn test_put_call_parity() {
    let cases = [
        (100.0, 100.0, 1.0, 0.05, 0.20),
        (100.0, 90.0, 0.25, 0.05, 0.35),
        (50.0, 120.0, 2.0, 0.01, 0.80),
        (250.0, 240.0, 0.1, 0.10, 0.15),
    ];

    for (s, k, t, r, sigma) in cases {
        let call = price(s, k, t, r, sigma, OptionType::Call).expect("call price failed");
        let put = price(s, k, t, r, sigma, OptionType::Put).expect("put price failed");
        let parity = call - put - (s - k * (-r * t).exp());

        assert!(
            parity.abs() < 1e-6 * s,
            "Parity violated for S={}, K={}: residual {}",
            s,
            k,
            parity
        );
    }
}

/// ATM call with 20% vol, 1 year, 5% rate has a well-known value near 10.45.
#[test]
fn test_atm_call_known_value() {
    let call = price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call).expect("price failed");
    assert!(
        (call - 10.4506).abs() < 1e-3,
        "ATM call should be ~10.4506, got {}",
        call
    );
}

/// Non-positive time to expiry, volatility, spot or strike must signal a
/// domain error, never NaN or Infinity.
#[test]
fn test_domain_rejection() {
    let bad_inputs = [
        (100.0, 100.0, 0.0, 0.2),  // zero time
        (100.0, 100.0, -1.0, 0.2), // negative time
        (100.0, 100.0, 1.0, 0.0),  // zero vol
        (100.0, 100.0, 1.0, -0.3), // negative vol
        (0.0, 100.0, 1.0, 0.2),    // zero spot
        (100.0, -5.0, 1.0, 0.2),   // negative strike
    ];

    for (s, k, t, sigma) in bad_inputs {
        let result = price(s, k, t, 0.05, sigma, OptionType::Call);
        assert!(
            matches!(result, Err(EngineError::Domain(_))),
            "Expected domain error for S={}, K={}, T={}, vol={}",
            s,
            k,
            t,
            sigma
        );

        // Greeks share the same error policy
        assert!(delta(s, k, t, 0.05, sigma, OptionType::Put).is_err());
        assert!(gamma(s, k, t, 0.05, sigma).is_err());
        assert!(theta(s, k, t, 0.05, sigma, OptionType::Call).is_err());
        assert!(vega(s, k, t, 0.05, sigma).is_err());
        assert!(rho(s, k, t, 0.05, sigma, OptionType::Call).is_err());
    }
}

/// Analytic delta must agree with the central finite difference of the price
/// in spot, for both option types.
#[test]
fn test_delta_matches_finite_difference() {
    let (s, k, t, r, sigma) = (100.0, 105.0, 0.5, 0.05, 0.3);
    let eps = 0.01 * s;

    for option_type in [OptionType::Call, OptionType::Put] {
        let analytic = delta(s, k, t, r, sigma, option_type).unwrap();
        let up = price(s + eps, k, t, r, sigma, option_type).unwrap();
        let down = price(s - eps, k, t, r, sigma, option_type).unwrap();
        let numeric = (up - down) / (2.0 * eps);

        assert!(
            (analytic - numeric).abs() < 1e-3,
            "Delta mismatch for {:?}: analytic {}, numeric {}",
            option_type,
            analytic,
            numeric
        );
    }
}

/// Analytic gamma must agree with the second central difference in spot.
#[test]
fn test_gamma_matches_finite_difference() {
    let (s, k, t, r, sigma) = (100.0, 100.0, 0.5, 0.05, 0.25);
    let eps = 0.01 * s;

    let analytic = gamma(s, k, t, r, sigma).unwrap();
    let up = price(s + eps, k, t, r, sigma, OptionType::Call).unwrap();
    let mid = price(s, k, t, r, sigma, OptionType::Call).unwrap();
    let down = price(s - eps, k, t, r, sigma, OptionType::Call).unwrap();
    let numeric = (up - 2.0 * mid + down) / (eps * eps);

    assert!(
        (analytic - numeric).abs() < 1e-4,
        "Gamma mismatch: analytic {}, numeric {}",
        analytic,
        numeric
    );
}

/// Analytic vega must agree with the central finite difference in volatility.
#[test]
fn test_vega_matches_finite_difference() {
    let (s, k, t, r, sigma) = (100.0, 95.0, 0.75, 0.05, 0.4);
    let eps = 1e-4;

    let analytic = vega(s, k, t, r, sigma).unwrap();
    let up = price(s, k, t, r, sigma + eps, OptionType::Put).unwrap();
    let down = price(s, k, t, r, sigma - eps, OptionType::Put).unwrap();
    let numeric = (up - down) / (2.0 * eps);

    assert!(
        (analytic - numeric).abs() < 1e-3,
        "Vega mismatch: analytic {}, numeric {}",
        analytic,
        numeric
    );
}

/// Theta is quoted as time decay, so it carries the opposite sign of the
/// price's derivative with respect to time to expiry.
#[test]
fn test_theta_matches_finite_difference() {
    let (s, k, t, r, sigma) = (100.0, 100.0, 1.0, 0.05, 0.2);
    let eps = 1e-5;

    for option_type in [OptionType::Call, OptionType::Put] {
        let analytic = theta(s, k, t, r, sigma, option_type).unwrap();
        let up = price(s, k, t + eps, r, sigma, option_type).unwrap();
        let down = price(s, k, t - eps, r, sigma, option_type).unwrap();
        let numeric = (up - down) / (2.0 * eps);

        assert!(
            (analytic + numeric).abs() < 1e-3,
            "Theta mismatch for {:?}: analytic {}, dPrice/dT {}",
            option_type,
            analytic,
            numeric
        );
    }
}

/// Delta ranges: call in (0, 1), put in (-1, 0). Vega and gamma positive,
/// rho signed by option type.
#[test]
fn test_greek_signs_and_ranges() {
    let (s, k, t, r, sigma) = (100.0, 110.0, 0.5, 0.05, 0.3);

    let call_delta = delta(s, k, t, r, sigma, OptionType::Call).unwrap();
    let put_delta = delta(s, k, t, r, sigma, OptionType::Put).unwrap();
    assert!(call_delta > 0.0 && call_delta < 1.0);
    assert!(put_delta > -1.0 && put_delta < 0.0);
    // Same d1, so the two deltas differ by exactly 1
    assert!((call_delta - put_delta - 1.0).abs() < 1e-12);

    assert!(gamma(s, k, t, r, sigma).unwrap() > 0.0);
    assert!(vega(s, k, t, r, sigma).unwrap() > 0.0);
    assert!(rho(s, k, t, r, sigma, OptionType::Call).unwrap() > 0.0);
    assert!(rho(s, k, t, r, sigma, OptionType::Put).unwrap() < 0.0);
}

/// ITM/OTM classification flips with option type around the strike.
#[test]
fn test_moneyness_classification() {
    let expiry = Utc.with_ymd_and_hms(2025, 9, 19, 0, 0, 0).unwrap();

    let call = OptionContract::new("TEST-100-C", OptionType::Call, 100.0, expiry, "TEST");
    let put = OptionContract::new("TEST-100-P", OptionType::Put, 100.0, expiry, "TEST");

    assert!(call.is_itm(110.0));
    assert!(!call.is_itm(95.0));
    assert!(put.is_itm(95.0));
    assert!(!put.is_itm(110.0));

    // Exactly at the strike neither side is in the money
    assert!(!call.is_itm(100.0));
    assert!(!put.is_itm(100.0));
}

/// In-the-money call: intrinsic value is S - K and the theoretical price
/// decomposes exactly into intrinsic + extrinsic.
#[test]
fn test_intrinsic_extrinsic_decomposition() {
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
    let expiry = now + Duration::days(90);

    let contract = OptionContract::new("TEST-100-C", OptionType::Call, 100.0, expiry, "TEST");
    let config = EngineConfig::default();

    // Moneyness classification agrees with the intrinsic payoff
    assert!(contract.is_itm(120.0));
    assert!(!contract.is_itm(90.0));

    let analysis = analyze_option(&contract, 120.0, &config, now).expect("analysis failed");

    assert!(
        (analysis.intrinsic_value - 20.0).abs() < 1e-12,
        "Intrinsic should be 20, got {}",
        analysis.intrinsic_value
    );
    assert!(analysis.intrinsic_value >= 0.0);
    assert!(
        (analysis.theoretical_price - (analysis.intrinsic_value + analysis.extrinsic_value)).abs()
            < 1e-9,
        "Price must decompose into intrinsic + extrinsic"
    );
}
