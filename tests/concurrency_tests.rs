mod common;

use rand::Rng;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_inserts_for_one_vehicle_lose_no_updates() {
    let svc = common::decorated_service();
    let callers = 128;
    let delta = 2.5;

    let tasks: Vec<_> = (0..callers)
        .map(|_| {
            let svc = svc.clone();
            tokio::spawn(async move { svc.record_distance(common::event(42, delta)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let invoice = svc.compute_invoice(42).await.unwrap();
    let expected = callers as f64 * delta;
    assert!(
        (invoice.total_distance - expected).abs() < 1e-6,
        "lost update: expected {expected}, got {}",
        invoice.total_distance
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_inserts_for_distinct_vehicles_stay_isolated() {
    let svc = common::decorated_service();
    let vehicles = 50;
    let inserts_per_vehicle = 20;

    let tasks: Vec<_> = (1..=vehicles)
        .map(|obu_id| {
            let svc = svc.clone();
            tokio::spawn(async move {
                let deltas: Vec<f64> = {
                    let mut rng = rand::thread_rng();
                    (0..inserts_per_vehicle)
                        .map(|_| rng.gen_range(0.1..10.0))
                        .collect()
                };
                let expected: f64 = deltas.iter().sum();
                for delta in deltas {
                    svc.record_distance(common::event(obu_id, delta))
                        .await
                        .unwrap();
                }
                (obu_id, expected)
            })
        })
        .collect();

    for task in tasks {
        let (obu_id, expected) = task.await.unwrap();
        let invoice = svc.compute_invoice(obu_id).await.unwrap();
        assert!(
            (invoice.total_distance - expected).abs() < 1e-6,
            "OBU {obu_id}: expected {expected}, got {}",
            invoice.total_distance
        );
    }
}

#[tokio::test]
async fn test_read_after_write_observes_the_insert() {
    let svc = common::decorated_service();

    for i in 1..=100 {
        svc.record_distance(common::event(7, 1.0)).await.unwrap();
        let invoice = svc.compute_invoice(7).await.unwrap();
        assert!(
            (invoice.total_distance - i as f64).abs() < 1e-9,
            "read after write {i} observed {}",
            invoice.total_distance
        );
    }
}
