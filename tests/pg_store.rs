//! Round-trip against a real PostgreSQL. Skipped unless `DB_URL` is set.
//! The schema script drops and recreates both tables, so point it at a scratch database.

use atlas_api::{
    apply_schema, connect, ensure_database_exists, AppError, CountryPatch, CountryService, LeaderService, NewCountry,
    NewLeader, PgStore, Settings, Store, SCHEMA_SQL,
};

#[tokio::test]
async fn crud_round_trip_against_postgres() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    if std::env::var("DB_URL").is_err() {
        eprintln!("DB_URL not set; skipping");
        return Ok(());
    }
    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect(&settings).await?;
    apply_schema(&pool, SCHEMA_SQL).await?;
    let store = PgStore::new(pool);

    let seeded = CountryService::get_all(&store).await?;
    assert_eq!(seeded.len(), 3);

    let new = NewCountry {
        name: "Japan".into(),
        capital: "Tokyo".into(),
        population: 125_000_000,
        languages: "Japanese".into(),
    };
    let japan = CountryService::create(&store, &new).await?;
    assert!(japan.country_id > 0);
    assert!(matches!(
        CountryService::create(&store, &new).await,
        Err(AppError::Conflict(_))
    ));

    let mut found = CountryService::get_one_by_country_name(&store, "JAPAN").await?;
    assert_eq!(found, japan);

    let patch = CountryPatch {
        fun_fact: Some(Some("Over 6,800 islands".into())),
        ..Default::default()
    };
    let updated = CountryService::update(&store, &mut found, patch).await?;
    assert_eq!(updated.fun_fact.as_deref(), Some("Over 6,800 islands"));
    assert_eq!(updated.capital, "Tokyo");

    let leader = LeaderService::create(
        &store,
        &NewLeader {
            name: "Fumio Kishida".into(),
            years_in_service: 3,
            country: Some("japan".into()),
            country_id: None,
        },
    )
    .await?;
    assert_eq!(leader.country_id, japan.country_id);

    let deleted = CountryService::destroy(&store, &updated).await?;
    assert_eq!(deleted, updated);
    assert!(LeaderService::get_one_by_leader_name(&store, "Fumio Kishida").await.is_err());

    store.close().await;
    Ok(())
}
