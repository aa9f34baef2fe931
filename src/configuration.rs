pub trait Configuration: Clone + Send + Sync + 'static {
    fn api_key(&self) -> String;
    fn port(&self) -> String;
    fn database_url(&self) -> Option<String>;
}
