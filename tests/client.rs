mod utils;

use crate::utils::body_from_file;
use std::net::TcpListener;
use syno_nas_api::client::{Connection, SynoError, SynoNas};
use utils::query_params;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SID: &str = "abc123";

// Helper function to start a mock server and a client pointed at it
async fn setup_client() -> (MockServer, SynoNas, String, u16) {
    // Start a lightweight mock server.
    let server = MockServer::start().await;
    let address = *server.address();

    (server, SynoNas::default(), address.ip().to_string(), address.port())
}

fn json_response(response_file: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .append_header("content-type", "application/json")
        .set_body_string(body_from_file(response_file))
}

// Helper function to create a mock for login
async fn create_login_mock(server: &MockServer, account: &str, password: &str, response_file: &str) {
    Mock::given(method("GET"))
        .and(path("/webapi/auth.cgi"))
        .and(query_params(vec![
            ("api", "SYNO.API.Auth"),
            ("version", "6"),
            ("method", "login"),
            ("account", account),
            ("passwd", password),
            ("session", "Core"),
            ("format", "cookie"),
        ]))
        .respond_with(json_response(response_file))
        .expect(1)
        .mount(server)
        .await;
}

// Helper function to create a mock for any entry.cgi query
async fn create_api_mock(server: &MockServer, params: Vec<(&str, &str)>, response: ResponseTemplate) {
    let mut params = params;
    params.push(("_sid", SID));

    Mock::given(method("GET"))
        .and(path("/webapi/entry.cgi"))
        .and(query_params(params))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn connect(server: &MockServer, synonas: &SynoNas, host: &str, port: u16) -> Connection {
    create_login_mock(server, "admin", "pw", "test-files/login_success.json").await;
    synonas.connect(host, port, "admin", "pw").await.unwrap()
}

fn syno_error(error: &anyhow::Error) -> &SynoError {
    error
        .downcast_ref::<SynoError>()
        .expect("error should carry a SynoError")
}

#[tokio::test]
async fn test_connect() {
    let (server, synonas, host, port) = setup_client().await;

    let conn = connect(&server, &synonas, &host, port).await;

    server.verify().await;

    assert_eq!(conn.token(), "abc123");
    assert_eq!(conn.origin(), format!("http://{host}:{port}"));
    assert!(!format!("{conn:?}").contains("abc123"));
}

#[tokio::test]
async fn test_connect_encodes_credentials() {
    let (server, synonas, host, port) = setup_client().await;

    let password = "p&ss%word=1 [x]";
    create_login_mock(&server, "ad min", password, "test-files/login_success.json").await;

    let conn = synonas.connect(&host, port, "ad min", password).await.unwrap();

    server.verify().await;
    assert_eq!(conn.token(), "abc123");
}

#[tokio::test]
async fn test_connect_rejected() {
    let (server, synonas, host, port) = setup_client().await;

    create_login_mock(&server, "admin", "wrong", "test-files/login_failed.json").await;

    let error = synonas.connect(&host, port, "admin", "wrong").await.unwrap_err();

    server.verify().await;

    match syno_error(&error) {
        SynoError::Api { code, message } => {
            assert_eq!(*code, 400);
            assert_eq!(message, "No such account or incorrect password");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_refused() {
    // Reserve a free port, then release it so nothing listens there
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let error = SynoNas::default()
        .connect("127.0.0.1", port, "admin", "pw")
        .await
        .unwrap_err();

    assert!(matches!(syno_error(&error), SynoError::Network(_)));
}

#[tokio::test]
async fn test_connect_invalid_host() {
    for host in ["http://nas.local", "nas.local?x", "admin@nas.local"] {
        let error = SynoNas::default()
            .connect(host, 5000, "admin", "pw")
            .await
            .unwrap_err();

        assert!(
            matches!(syno_error(&error), SynoError::Configuration(_)),
            "{host} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_fetch_system_utilization() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Core.System.Utilization"),
        ("version", "1"),
        ("method", "get"),
    ];
    create_api_mock(
        &server,
        params,
        json_response("test-files/system_utilization_success.json"),
    )
    .await;

    let utilization = synonas.fetch_system_utilization(&conn).await.unwrap();

    server.verify().await;

    // Verify the response data
    assert_eq!(utilization.cpu.fifteen_min_load, 18);
    assert_eq!(utilization.cpu.one_min_load, 25);
    assert_eq!(utilization.cpu.user_load, 11);
    assert_eq!(utilization.disk.disk[0].display_name, "Drive 1");
    assert_eq!(utilization.disk.disk[0].disk_type, "internal");
    assert_eq!(utilization.disk.total.write_byte, 344_064);
    assert_eq!(utilization.lun[0].lun_type, "file");
    assert_eq!(utilization.lun[0].total_throughput, 20_480);
    assert_eq!(utilization.memory.total_real, 3_947_748);
    assert_eq!(utilization.memory.real_usage, 23);
    assert_eq!(utilization.network.len(), 2);
    assert_eq!(utilization.network[1].device, "eth0");
    assert_eq!(utilization.space.volume[0].display_name, "volume1");
    assert_eq!(utilization.time.timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn test_fetch_shares() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Core.Share"),
        ("version", "1"),
        ("method", "list"),
        ("shareType", "all"),
        ("additional", r#"["share_quota"]"#),
    ];
    create_api_mock(&server, params, json_response("test-files/shares_success.json")).await;

    let shares = synonas.fetch_shares(&conn).await.unwrap();

    server.verify().await;

    // Verify the response data
    assert_eq!(shares.total, 1);
    assert_eq!(shares.shares.len(), 1);
    let share = &shares.shares[0];
    assert_eq!(share.name, "homes");
    assert_eq!(share.uuid, "u1");
    assert_eq!(share.volume_path, "/volume1");
    assert!(!share.is_usb_share);
    assert!((share.quota - 100.0).abs() < f64::EPSILON);
    assert!((share.used_quota - 42.5).abs() < f64::EPSILON);
    assert!(share.description.is_empty());
}

#[tokio::test]
async fn test_fetch_storage_inventory() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Storage.CGI.Storage"),
        ("version", "1"),
        ("method", "load_info"),
    ];
    create_api_mock(
        &server,
        params,
        json_response("test-files/storage_info_success.json"),
    )
    .await;

    let storage = synonas.fetch_storage_inventory(&conn).await.unwrap();

    server.verify().await;

    // Check disk info
    assert_eq!(storage.disks.len(), 2);
    assert_eq!(storage.disks[0].id, "sda");
    assert_eq!(storage.disks[0].disk_type, "SATA");
    assert_eq!(storage.disks[0].temp, 34);
    assert_eq!(storage.disks[0].pci_slot, -1);
    assert_eq!(storage.disks[0].container.str, "DS918+");
    assert_eq!(storage.disks[0].size_display(), "4.00 TB");
    // Second disk only carries a few fields
    assert_eq!(storage.disks[1].temp, 36);
    assert!(storage.disks[1].vendor.is_empty());

    // Check environment info
    assert_eq!(storage.env.model_name, "DS918+");
    assert_eq!(storage.env.batchtask.max_task, 64);
    assert!(storage.env.support.raid_cross);
    assert!(storage.hot_spare_conf.cross_repair);

    // Check iSCSI info
    let lun = &storage.iscsi_luns[0];
    assert_eq!(lun.iscsi_lun.name, "LUN-1");
    assert_eq!(lun.iscsi_lun.mapped_targets, vec![1]);
    assert_eq!(lun.iscsi_lun.scheduled_task[0].general.task_name, "nightly");
    assert_eq!(lun.iscsi_lun.scheduled_task[0].schedule.min, 30);
    let target = &storage.iscsi_targets[0];
    assert_eq!(target.tid, 1);
    assert_eq!(target.auth.auth_type, "none");
    assert_eq!(target.masking[0].permission, "rw");

    // Check volume info
    let volume = &storage.volumes[0];
    assert_eq!(volume.fs_type, "btrfs");
    assert_eq!(volume.vol_path, "/volume1");
    assert_eq!(volume.raids[0].devices.len(), 2);
    assert_eq!(volume.raids[0].raid_path, "/dev/md2");
    assert_eq!(volume.size.total, "7661495631872");
    assert!(volume.vspace_can_do.flashcache.apply.can_do);
    assert_eq!(volume.usage_percent(), Some(25.0));
    assert_eq!(storage.volume_disks(volume).count(), 2);
}

#[tokio::test]
async fn test_session_expired() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Core.Share"),
        ("version", "1"),
        ("method", "list"),
        ("shareType", "all"),
        ("additional", r#"["share_quota"]"#),
    ];
    create_api_mock(&server, params, json_response("test-files/session_expired.json")).await;

    let error = synonas.fetch_shares(&conn).await.unwrap_err();

    server.verify().await;

    let error = syno_error(&error);
    assert!(matches!(error, SynoError::Api { code: 119, .. }));
    assert!(error.is_session_error());
}

#[tokio::test]
async fn test_failed_envelope_with_empty_data() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Storage.CGI.Storage"),
        ("version", "1"),
        ("method", "load_info"),
    ];
    create_api_mock(&server, params, json_response("test-files/failed_empty_data.json")).await;

    let error = synonas.fetch_storage_inventory(&conn).await.unwrap_err();

    server.verify().await;

    assert!(matches!(
        syno_error(&error),
        SynoError::Api { code: 100, .. }
    ));
}

#[tokio::test]
async fn test_http_error_status() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Core.System.Utilization"),
        ("version", "1"),
        ("method", "get"),
    ];
    create_api_mock(&server, params, ResponseTemplate::new(502)).await;

    let error = synonas.fetch_system_utilization(&conn).await.unwrap_err();

    server.verify().await;

    assert!(matches!(
        syno_error(&error),
        SynoError::Http { status: 502, .. }
    ));
}

#[tokio::test]
async fn test_malformed_response() {
    let (server, synonas, host, port) = setup_client().await;
    let conn = connect(&server, &synonas, &host, port).await;

    let params = vec![
        ("api", "SYNO.Core.System.Utilization"),
        ("version", "1"),
        ("method", "get"),
    ];
    create_api_mock(
        &server,
        params,
        ResponseTemplate::new(200).set_body_string("<html>DSM is starting</html>"),
    )
    .await;

    let error = synonas.fetch_system_utilization(&conn).await.unwrap_err();

    server.verify().await;

    assert!(matches!(
        syno_error(&error),
        SynoError::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_connections_to_two_devices() {
    let (first, synonas, first_host, first_port) = setup_client().await;
    let second = MockServer::start().await;

    let first_conn = connect(&first, &synonas, &first_host, first_port).await;
    let second_conn = Connection::from_parts(&second.uri(), "other-sid").unwrap();

    Mock::given(method("GET"))
        .and(path("/webapi/entry.cgi"))
        .and(query_param("_sid", "other-sid"))
        .respond_with(json_response("test-files/shares_success.json"))
        .expect(1)
        .mount(&second)
        .await;
    create_api_mock(
        &first,
        vec![
            ("api", "SYNO.Core.Share"),
            ("version", "1"),
            ("method", "list"),
            ("shareType", "all"),
            ("additional", r#"["share_quota"]"#),
        ],
        json_response("test-files/shares_success.json"),
    )
    .await;

    let from_first = synonas.fetch_shares(&first_conn).await.unwrap();
    let from_second = synonas.fetch_shares(&second_conn).await.unwrap();

    first.verify().await;
    second.verify().await;

    assert_eq!(from_first.total, 1);
    assert_eq!(from_second.shares[0].name, "homes");
    assert_ne!(first_conn, second_conn);
}
