use std::process::Command;

#[test]
fn missing_service_key_halts_with_exit_code_1() {
    // An empty value wins over any stray .env file (dotenvy never
    // overrides variables already present) and is treated as missing.
    let output = Command::new(env!("CARGO_BIN_EXE_publish-template"))
        .env("SUPABASE_SERVICE_ROLE_KEY", "")
        .output()
        .expect("failed to spawn publish-template");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("SUPABASE_SERVICE_ROLE_KEY"),
        "diagnostic should name the missing variable, got: {combined}"
    );
}
