mod home;
mod host_detail;
mod login;
mod my_host;
mod register;

pub use home::Home;
pub use host_detail::HostDetail;
pub use login::Login;
pub use my_host::MyHost;
pub use register::Register;
