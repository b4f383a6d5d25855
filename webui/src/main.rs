fn main() {
    #[cfg(feature = "csr")]
    webui::mount();
}
