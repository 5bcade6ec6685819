fn main() {
    // Set build date/time as an environment variable
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();
    println!("cargo:rustc-env=GRIDSKETCH_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
