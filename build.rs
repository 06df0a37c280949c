fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Contact relay identifiers are read with option_env! at compile time
    for var in [
        "CONTACT_SERVICE_ID",
        "CONTACT_OWNER_TEMPLATE_ID",
        "CONTACT_SENDER_TEMPLATE_ID",
        "CONTACT_PUBLIC_KEY",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
