use std::error::Error;

use ecoflight::*;

/// Verifies the full calculation pipeline for a known route:
/// LAX -> ORD, business class, 2 passengers.
#[tokio::test]
async fn acceptance_calculation() -> Result<(), Box<dyn Error>> {
    let request = CalculationRequest::parse("lax", "ord", "business", "2")?;

    let table = load_routes()?;
    let distance = table.resolve(&request.departure, &request.arrival).await?;
    assert_eq!(distance, 2800.0);

    let summary = summarize(
        distance,
        request.class,
        request.passengers,
        &EmissionFactors::default(),
        &ComparisonFactors::default(),
    );

    // 2800 km * 0.26 * 2 = 1456 kg
    assert_eq!(summary.total, "1.5 metric tons");
    assert_eq!(summary.per_passenger, "728 kg");
    assert_eq!(summary.distance_km, 2800);
    assert_eq!(summary.comparisons.len(), 4);

    Ok(())
}

/// Unknown pairs resolve to the default medium-haul distance.
#[tokio::test]
async fn acceptance_unknown_route() -> Result<(), Box<dyn Error>> {
    let table = load_routes()?;
    assert_eq!(table.resolve("AAA", "ZZZ").await?, DEFAULT_DISTANCE_KM);
    Ok(())
}

/// Every route in the table is stored in both directions with the same
/// distance; batch resolution preserves the order of the queried pairs.
#[tokio::test]
async fn table_is_symmetric() -> Result<(), Box<dyn Error>> {
    let table = load_routes()?;

    let pairs = [
        ("LHR", "JFK"),
        ("LAX", "ORD"),
        ("SFO", "DXB"),
        ("CDG", "BCN"),
        ("SYD", "MEL"),
    ];
    let forward = pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect::<Vec<_>>();
    let backward = pairs
        .iter()
        .map(|(a, b)| (b.to_string(), a.to_string()))
        .collect::<Vec<_>>();

    let outbound = resolve_all(&forward, &table).await?;
    let inbound = resolve_all(&backward, &table).await?;

    assert_eq!(outbound, inbound);
    assert_eq!(outbound, vec![5550.0, 2800.0, 13000.0, 850.0, 705.0]);

    Ok(())
}

/// The theme preference is read once at startup and survives restarts.
#[tokio::test]
async fn theme_survives_restart() -> Result<(), Box<dyn Error>> {
    let root = std::env::temp_dir().join("ecoflight-theme-it");
    let _ = std::fs::remove_dir_all(&root);

    {
        let store = LocalDisk::new(&root);
        assert_eq!(load_theme(&store).await?, Theme::Light);
        save_theme(&store, Theme::Light.toggled()).await?;
    }

    let store = LocalDisk::new(&root);
    assert_eq!(load_theme(&store).await?, Theme::Dark);

    std::fs::remove_dir_all(&root)?;
    Ok(())
}
