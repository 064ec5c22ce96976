mod components;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod reset_password;
pub use reset_password::ResetPassword;

mod new_password;
pub use new_password::NewPassword;

mod overview;
pub use overview::{DashboardPlaceholder, Overview};
