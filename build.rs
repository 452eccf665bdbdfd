fn main() {
    println!("cargo:rerun-if-env-changed=SIGNALFLOW_CONFIG");
    println!("cargo:rerun-if-env-changed=SIGNALFLOW_LEVEL_CONFIG");

    // ESP-IDF link arguments are only needed for the device binaries.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
