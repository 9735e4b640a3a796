use fanfetch as ff;

#[test]
fn test_log_init_levels() {
    ff::log_init("q");
    assert!(!ff::color_enabled());
    assert!(ff::log_enabled(ff::lv::E));
    assert!(ff::log_enabled(ff::lv::P));
    assert!(!ff::log_enabled(ff::lv::I));

    ff::log_init("vv");
    assert!(ff::log_enabled(ff::lv::D));
    assert!(ff::log_enabled(ff::lv::T));

    ff::log_init("");
    assert!(ff::log_enabled(ff::lv::W));
    assert!(!ff::log_enabled(ff::lv::D));
    // printing from a named thread at any level is fine
    std::thread::spawn(|| {
        ff::set_thread_print_name("worker");
        ff::print!("hello from {}", "worker");
        ff::hint!("a hint");
    })
    .join()
    .unwrap();
}
