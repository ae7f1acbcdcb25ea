use crate::options::Rounding;
use crate::stats::{LicenseReport, MachineTally, Tally, UserLicenses};

/// Licenses needed by one user.
///
/// Every desktop takes its own license. Laptops beyond the desktop count are
/// paired two per license, with an odd leftover resolved by `rounding`.
pub fn user_licenses(machines: &MachineTally, rounding: Rounding) -> u64 {
    let desktops = machines.desktops();
    let remaining = machines.laptops().saturating_sub(desktops);
    desktops + rounding.pairs(remaining)
}

/// Sum of [`user_licenses`] over every user in the tally.
pub fn total_licenses(tally: &Tally, rounding: Rounding) -> u64 {
    tally
        .iter()
        .map(|(_, machines)| user_licenses(machines, rounding))
        .sum()
}

/// Build the per-user breakdown for a tally, sorted by user ID.
pub fn license_report(tally: &Tally, app_id: &str, rounding: Rounding) -> LicenseReport {
    let mut users: Vec<UserLicenses> = tally
        .iter()
        .map(|(user_id, machines)| {
            let licenses = user_licenses(machines, rounding);
            log::debug!(
                "user {user_id}: {} desktop(s), {} laptop(s) -> {licenses} license(s)",
                machines.desktops(),
                machines.laptops()
            );
            UserLicenses {
                user_id: user_id.to_string(),
                desktops: machines.desktops(),
                laptops: machines.laptops(),
                other: machines.other(),
                licenses,
            }
        })
        .collect();
    users.sort_by(|a, b| a.user_id.cmp(&b.user_id));

    let total_licenses = users.iter().map(|u| u.licenses).sum();

    LicenseReport {
        app_id: app_id.to_string(),
        rounding,
        users,
        total_licenses,
    }
}
