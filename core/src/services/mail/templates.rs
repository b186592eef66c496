//! HTML bodies and subjects for the transactional emails

/// Subject line for the verification-code email
pub const OTP_SUBJECT: &str = "Verify your Vendora account";

/// Subject line for the welcome email sent after verification
pub const WELCOME_SUBJECT: &str = "Welcome to Vendora";

/// Subject line for the staff account email
pub const STAFF_WELCOME_SUBJECT: &str = "Your Vendora staff account";

/// Body of the verification-code email
pub fn otp_email_body(name: &str, code: &str, expiry_minutes: i64) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:0 auto">
  <h2 style="color:#1a1a2e">Hi {name},</h2>
  <p>Thanks for signing up with Vendora. Use the code below to verify your email address:</p>
  <p style="font-size:32px;font-weight:bold;letter-spacing:8px;text-align:center;color:#e94560">{code}</p>
  <p>The code expires in {expiry_minutes} minutes. If you did not create an account, ignore this email.</p>
  <p style="color:#888">The Vendora Team</p>
</div>"#
    )
}

/// Body of the welcome email sent once the account is verified
pub fn welcome_email_body(name: &str, display_id: &str) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:0 auto">
  <h2 style="color:#1a1a2e">Welcome aboard, {name}!</h2>
  <p>Your Vendora account is verified and ready to use.</p>
  <p>Your account ID is <strong>{display_id}</strong>.</p>
  <p>Sign in with your email address. Your chosen password is the one you set during registration.</p>
  <p style="color:#888">The Vendora Team</p>
</div>"#
    )
}

/// Body of the email sent to a newly provisioned staff member
///
/// Carries the initial password in plain text, so staff accounts are
/// expected to change it on first sign-in.
pub fn staff_welcome_email_body(
    name: &str,
    email: &str,
    password: &str,
    role_label: &str,
) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:0 auto">
  <h2 style="color:#1a1a2e">Hi {name},</h2>
  <p>A Vendora <strong>{role_label}</strong> account has been created for you.</p>
  <p>Email: <strong>{email}</strong><br/>Password: <strong>{password}</strong></p>
  <p>Please sign in and change your password as soon as possible.</p>
  <p style="color:#888">The Vendora Team</p>
</div>"#
    )
}
