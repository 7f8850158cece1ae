//! Route table of the solutions namespace.
//!
//! Every template anchors at `{+baseurl}` and declares its understood query
//! parameters under the literal percent-encoded wire names.

use crate::resource::Route;

pub(crate) const BACKUP_RESTORE: &str =
    "{+baseurl}/solutions/backupRestore{?%24expand,%24select}";

pub(crate) const RESTORE_SESSIONS: Route = Route {
    collection: "{+baseurl}/solutions/backupRestore/restoreSessions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/backupRestore/restoreSessions/{restoreSessionId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/backupRestore/restoreSessions/$count{?%24filter,%24search}",
    id_key: "restoreSessionId",
};

pub(crate) const PROTECTION_UNITS: Route = Route {
    collection: "{+baseurl}/solutions/backupRestore/protectionUnits{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/backupRestore/protectionUnits/{protectionUnitId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/backupRestore/protectionUnits/$count{?%24filter,%24search}",
    id_key: "protectionUnitId",
};

pub(crate) const DRIVE_PROTECTION_UNITS: Route = Route {
    collection: "{+baseurl}/solutions/backupRestore/driveProtectionUnits{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/backupRestore/driveProtectionUnits/{driveProtectionUnitId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/backupRestore/driveProtectionUnits/$count{?%24filter,%24search}",
    id_key: "driveProtectionUnitId",
};

pub(crate) const MAILBOX_PROTECTION_UNITS: Route = Route {
    collection: "{+baseurl}/solutions/backupRestore/mailboxProtectionUnits{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/backupRestore/mailboxProtectionUnits/{mailboxProtectionUnitId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/backupRestore/mailboxProtectionUnits/$count{?%24filter,%24search}",
    id_key: "mailboxProtectionUnitId",
};

pub(crate) const SITE_PROTECTION_UNITS: Route = Route {
    collection: "{+baseurl}/solutions/backupRestore/siteProtectionUnits{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/backupRestore/siteProtectionUnits/{siteProtectionUnitId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/backupRestore/siteProtectionUnits/$count{?%24filter,%24search}",
    id_key: "siteProtectionUnitId",
};

pub(crate) const VIRTUAL_EVENTS: &str =
    "{+baseurl}/solutions/virtualEvents{?%24expand,%24select}";

pub(crate) const EVENTS: Route = Route {
    collection: "{+baseurl}/solutions/virtualEvents/events{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/virtualEvents/events/{virtualEventId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/virtualEvents/events/$count{?%24filter,%24search}",
    id_key: "virtualEventId",
};

pub(crate) const WEBINARS: Route = Route {
    collection: "{+baseurl}/solutions/virtualEvents/webinars{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/virtualEvents/webinars/{virtualEventWebinarId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/virtualEvents/webinars/$count{?%24filter,%24search}",
    id_key: "virtualEventWebinarId",
};

pub(crate) const WEBINAR_SESSIONS: Route = Route {
    collection: "{+baseurl}/solutions/virtualEvents/webinars/{virtualEventWebinarId}/sessions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}",
    item: "{+baseurl}/solutions/virtualEvents/webinars/{virtualEventWebinarId}/sessions/{virtualEventSessionId}{?%24expand,%24select}",
    count: "{+baseurl}/solutions/virtualEvents/webinars/{virtualEventWebinarId}/sessions/$count{?%24filter,%24search}",
    id_key: "virtualEventSessionId",
};
