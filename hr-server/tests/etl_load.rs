//! Loader integration tests against the in-memory store
//!
//! Each test gets its own database and its own CSV fixtures in a
//! temporary directory.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use hr_server::db;
use hr_server::db::repository::{
    AreaRepository, CargoRepository, EmpleadoRepository, NominaRepository,
};
use hr_server::etl;

const EMPLEADOS_HEADER: &str =
    "documento,nombre,apellido,email,edad,ciudad,barrio,roles,salarioBase,area,cargo,fechaContratacion";
const NOMINAS_HEADER: &str = "documentoEmpleado,periodo,fechaEmision,\
devengosConcepto1,devengosValor1,devengosConcepto2,devengosValor2,\
deduccionesConcepto1,deduccionesValor1,deduccionesConcepto2,deduccionesValor2";

fn write_csv(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn write_base_fixtures(dir: &Path) {
    write_csv(dir, "areas.csv", "nombre\nVentas\nTecnologia\n");
    write_csv(dir, "cargos.csv", "nombre\nAnalista\nGerente\n");
    write_csv(
        dir,
        "empleados.csv",
        &format!(
            "{EMPLEADOS_HEADER}\n\
             1001,Laura,Gomez,laura@acme.test,34,Medellin,Laureles,\"ventas,supervisor\",1000,Ventas,Analista,2021-03-15\n\
             1002,Carlos,Rojas,carlos@acme.test,41,Bogota,Chapinero,,2000,Tecnologia,Gerente,2019-08-01\n"
        ),
    );
    write_csv(
        dir,
        "nominas.csv",
        &format!(
            "{NOMINAS_HEADER}\n\
             1001,2024-05,2024-05-31,Bono,100,,,Salud,50,,\n\
             1002,2024-05,2024-05-31,Bono,150,Horas extra,80,Salud,60,Pension,60\n"
        ),
    );
}

#[tokio::test]
async fn load_areas_builds_name_map() {
    let tmp = TempDir::new().expect("tempdir");
    write_csv(tmp.path(), "areas.csv", "nombre\nVentas\n");
    let db = db::connect_memory().await.expect("db");

    let map = etl::loader::load_areas(&db, tmp.path()).await.expect("load");

    assert_eq!(map.len(), 1);
    assert!(map.contains_key("Ventas"));

    let areas = AreaRepository::new(db.clone()).find_all().await.expect("find");
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].nombre, "Ventas");
    assert_eq!(areas[0].id.as_ref(), map.get("Ventas"));
}

#[tokio::test]
async fn full_run_loads_everything() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    let db = db::connect_memory().await.expect("db");

    let summary = etl::run(&db, tmp.path()).await.expect("run");

    assert_eq!(summary.areas, 2);
    assert_eq!(summary.cargos, 2);
    assert_eq!(summary.empleados.loaded, 2);
    assert_eq!(summary.empleados.skipped, 0);
    assert_eq!(summary.nominas.loaded, 2);
    assert_eq!(summary.nominas.skipped, 0);

    let nominas = NominaRepository::new(db.clone()).find_all().await.expect("find");
    assert_eq!(nominas.len(), 2);
}

#[tokio::test]
async fn rerun_is_idempotent_and_keeps_ids_stable() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    let db = db::connect_memory().await.expect("db");

    etl::run(&db, tmp.path()).await.expect("first run");

    let empleados = EmpleadoRepository::new(db.clone());
    let first = empleados
        .find_by_documento("1001")
        .await
        .expect("find")
        .expect("exists");

    etl::run(&db, tmp.path()).await.expect("second run");

    assert_eq!(AreaRepository::new(db.clone()).find_all().await.expect("areas").len(), 2);
    assert_eq!(CargoRepository::new(db.clone()).find_all().await.expect("cargos").len(), 2);
    assert_eq!(empleados.find_all().await.expect("empleados").len(), 2);
    assert_eq!(NominaRepository::new(db.clone()).find_all().await.expect("nominas").len(), 2);

    let second = empleados
        .find_by_documento("1001")
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn rerun_picks_up_changed_source_data() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    let db = db::connect_memory().await.expect("db");

    etl::run(&db, tmp.path()).await.expect("first run");

    // Same documento, new salary: must update in place, not duplicate
    write_csv(
        tmp.path(),
        "empleados.csv",
        &format!(
            "{EMPLEADOS_HEADER}\n\
             1001,Laura,Gomez,laura@acme.test,34,Medellin,Laureles,\"ventas,supervisor\",1500,Ventas,Analista,2021-03-15\n"
        ),
    );

    etl::run(&db, tmp.path()).await.expect("second run");

    let empleados = EmpleadoRepository::new(db.clone());
    assert_eq!(empleados.find_all().await.expect("empleados").len(), 2);
    let laura = empleados
        .find_by_documento("1001")
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(laura.salario_base, 1500.0);
}

#[tokio::test]
async fn empleado_with_unknown_area_is_skipped() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    write_csv(
        tmp.path(),
        "empleados.csv",
        &format!(
            "{EMPLEADOS_HEADER}\n\
             1001,Laura,Gomez,laura@acme.test,34,Medellin,Laureles,,1000,Marketing,Analista,2021-03-15\n\
             1002,Carlos,Rojas,carlos@acme.test,41,Bogota,Chapinero,,2000,Tecnologia,Gerente,2019-08-01\n"
        ),
    );
    let db = db::connect_memory().await.expect("db");

    let summary = etl::run(&db, tmp.path()).await.expect("run");

    assert_eq!(summary.empleados.loaded, 1);
    assert_eq!(summary.empleados.skipped, 1);

    let empleados = EmpleadoRepository::new(db.clone());
    assert!(empleados.find_by_documento("1001").await.expect("find").is_none());
    assert!(empleados.find_by_documento("1002").await.expect("find").is_some());
}

#[tokio::test]
async fn nomina_with_unknown_empleado_is_skipped() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    write_csv(
        tmp.path(),
        "nominas.csv",
        &format!(
            "{NOMINAS_HEADER}\n\
             9999,2024-05,2024-05-31,Bono,100,,,,,,\n\
             1001,2024-05,2024-05-31,Bono,100,,,Salud,50,,\n"
        ),
    );
    let db = db::connect_memory().await.expect("db");

    let summary = etl::run(&db, tmp.path()).await.expect("run");

    assert_eq!(summary.nominas.loaded, 1);
    assert_eq!(summary.nominas.skipped, 1);
    assert_eq!(
        NominaRepository::new(db.clone()).find_all().await.expect("find").len(),
        1
    );
}

#[tokio::test]
async fn nomina_totals_derive_from_stored_salario_base() {
    let tmp = TempDir::new().expect("tempdir");
    write_base_fixtures(tmp.path());
    let db = db::connect_memory().await.expect("db");

    etl::run(&db, tmp.path()).await.expect("run");

    let laura = EmpleadoRepository::new(db.clone())
        .find_by_documento("1001")
        .await
        .expect("find")
        .expect("exists");
    let nomina = NominaRepository::new(db.clone())
        .find_by_empleado_periodo(laura.id.as_ref().expect("id"), "2024-05")
        .await
        .expect("find")
        .expect("exists");

    // Gross pay is the employee's stored base salary, never a CSV value
    assert_eq!(nomina.salario_bruto, laura.salario_base);
    assert_eq!(nomina.devengos.len(), 1);
    assert_eq!(nomina.total_devengos, 100.0);
    assert_eq!(nomina.total_deducciones, 50.0);
    assert_eq!(nomina.salario_neto, 1050.0);
}

#[tokio::test]
async fn missing_source_files_yield_empty_run() {
    let tmp = TempDir::new().expect("tempdir");
    let db = db::connect_memory().await.expect("db");

    let summary = etl::run(&db, tmp.path()).await.expect("run");

    assert_eq!(summary.areas, 0);
    assert_eq!(summary.cargos, 0);
    assert_eq!(summary.empleados.loaded, 0);
    assert_eq!(summary.nominas.loaded, 0);
    assert!(AreaRepository::new(db.clone()).find_all().await.expect("find").is_empty());
}

#[tokio::test]
async fn preexisting_areas_still_land_in_the_map() {
    let tmp = TempDir::new().expect("tempdir");
    write_csv(tmp.path(), "areas.csv", "nombre\nVentas\n");
    let db = db::connect_memory().await.expect("db");

    // An area created through the API before the loader runs
    let repo = AreaRepository::new(db.clone());
    repo.upsert_by_nombre("Finanzas").await.expect("seed");

    let map = etl::loader::load_areas(&db, tmp.path()).await.expect("load");

    // The map is rebuilt from the collection, so it knows both
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("Ventas"));
    assert!(map.contains_key("Finanzas"));
}
