use folio_core_contact_form_impl::ContactFormServiceImpl;
use folio_core_contact_impl::ContactServiceImpl;
use folio_extern_impl::contact::ContactApiServiceImpl;
use folio_shared_impl::notification::ConsoleNotificationServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Contact>;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Shared
pub type Notification = ConsoleNotificationServiceImpl;

// Core
pub type Contact = ContactServiceImpl;
pub type ContactForm = ContactFormServiceImpl<ContactApi, Notification>;
