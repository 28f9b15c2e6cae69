//! Server-rendered landing page.
//!
//! Static content plus the two lead forms: the inline contact form and the
//! enquiry modal opened from each listing. The embedded script drives both
//! forms with the same pending/success/error flow as [`crate::form::LeadForm`].

use crate::form::{MODAL_CLOSE_DELAY, PAGE_COUNTRY, PAGE_PROPERTY_TYPE};
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

pub const PAGE_TITLE: &str =
    "Rishi Malik - Dubai's Ultra-Luxury Property Expert | ACE Elite Properties";
pub const PAGE_DESCRIPTION: &str = "CEO of ACE Elite Properties | Trusted Partner for Ultra-Luxury Homes in Dubai. Specializing in exclusive properties with Emaar, Damac, Omniyat, Binghatti, and Ellington.";

#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub title: &'static str,
    pub developer: &'static str,
    pub community: &'static str,
    pub kind: &'static str,
    pub bedrooms: &'static str,
    pub price_from: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub origin: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const LISTINGS: &[Listing] = &[
    Listing {
        title: "Emaar Beachfront Penthouse",
        developer: "Emaar",
        community: "Dubai Harbour",
        kind: "Penthouse",
        bedrooms: "4",
        price_from: "AED 18,500,000",
    },
    Listing {
        title: "Damac Lagoons Signature Villa",
        developer: "Damac",
        community: "Damac Lagoons",
        kind: "Villa",
        bedrooms: "5",
        price_from: "AED 9,750,000",
    },
    Listing {
        title: "Omniyat Orla Sky Residence",
        developer: "Omniyat",
        community: "Palm Jumeirah",
        kind: "Sky Residence",
        bedrooms: "4",
        price_from: "AED 42,000,000",
    },
    Listing {
        title: "Binghatti Skyrise Apartment",
        developer: "Binghatti",
        community: "Business Bay",
        kind: "Apartment",
        bedrooms: "2",
        price_from: "AED 2,900,000",
    },
    Listing {
        title: "Ellington Cove Townhouse",
        developer: "Ellington",
        community: "Dubai Islands",
        kind: "Townhouse",
        bedrooms: "3",
        price_from: "AED 6,400,000",
    },
];

pub const DEVELOPERS: &[&str] = &["Emaar", "Damac", "Omniyat", "Binghatti", "Ellington"];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Rishi found us an off-market villa on the Palm within two weeks and handled every step of the transfer.",
        author: "A. & S. Kapoor",
        origin: "London",
    },
    Testimonial {
        quote: "Straight answers on service charges, payment plans and resale value. Exactly what an overseas buyer needs.",
        author: "M. Al Hashimi",
        origin: "Riyadh",
    },
    Testimonial {
        quote: "Our second purchase with ACE Elite. The launch allocation alone was worth the call.",
        author: "D. Rossi",
        origin: "Milan",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Can foreigners buy freehold property in Dubai?",
        answer: "Yes. Buyers of any nationality can own freehold property in designated areas such as Palm Jumeirah, Downtown and Dubai Marina.",
    },
    Faq {
        question: "Does buying property qualify me for a Golden Visa?",
        answer: "Property investments of AED 2 million or more can qualify the owner for a 10-year UAE Golden Visa.",
    },
    Faq {
        question: "What fees should I budget for?",
        answer: "Plan for the 4% Dubai Land Department transfer fee, agency commission and registration charges on top of the purchase price.",
    },
    Faq {
        question: "Do you offer off-plan payment plans?",
        answer: "Most launches with Emaar, Damac, Omniyat, Binghatti and Ellington come with staged payment plans; we negotiate allocation and terms for you.",
    },
];

const CSS: &str = r#"
*{box-sizing:border-box}body{margin:0;font-family:Georgia,serif;background:#0d0d0d;color:#f2efe8}
a{color:#c9a45c}nav{position:sticky;top:0;display:flex;justify-content:space-between;padding:18px 40px;background:#111;z-index:10}
nav ul{display:flex;gap:24px;list-style:none;margin:0;padding:0}.logo-text{font-size:1.4rem;letter-spacing:.1em}
section{padding:64px 40px}.hero{min-height:60vh;display:flex;flex-direction:column;justify-content:center;background:linear-gradient(#0008,#000c),#222}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:24px}
.card{border:1px solid #333;padding:20px;border-radius:6px;background:#151515}
.partners{display:flex;flex-wrap:wrap;gap:32px;font-size:1.2rem;letter-spacing:.08em}
form{display:grid;gap:12px;max-width:520px}input,textarea{padding:10px;background:#1b1b1b;border:1px solid #444;color:inherit}
button{padding:12px;background:#c9a45c;border:0;color:#111;cursor:pointer}button:disabled{opacity:.6;cursor:wait}
.banner{padding:10px;border-radius:4px}.banner[hidden]{display:none}.banner.success{background:#1f3d25}.banner.error{background:#4a1f1f}
dialog{background:#151515;color:inherit;border:1px solid #444;max-width:560px;width:90%}
"#;

/// Drives both forms: disable while pending, POST, banner, reset on success,
/// close the modal after a delay.
const FORM_SCRIPT: &str = r#"
(function () {
  function bind(form) {
    var button = form.querySelector('button[type=submit]');
    var banner = form.querySelector('.banner');
    var idleLabel = button.textContent;
    var modal = form.closest('dialog');
    form.addEventListener('submit', async function (event) {
      event.preventDefault();
      if (button.disabled) { return; }
      button.disabled = true;
      button.textContent = 'Sending...';
      banner.hidden = true;
      var data = {};
      new FormData(form).forEach(function (value, key) { data[key] = value; });
      if (form.dataset.fixedCountry) { data.country = form.dataset.fixedCountry; }
      if (form.dataset.fixedPropertyType) { data.propertyType = form.dataset.fixedPropertyType; }
      try {
        var response = await fetch('/api/contact', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(data)
        });
        var result = await response.json().catch(function () { return {}; });
        if (response.ok && result.success) {
          form.reset();
          banner.className = 'banner success';
          banner.textContent = 'Thank you! We will be in touch shortly.';
          if (modal) {
            setTimeout(function () { modal.close(); banner.hidden = true; }, Number(form.dataset.closeDelayMs));
          }
        } else {
          banner.className = 'banner error';
          banner.textContent = 'Something went wrong. Please try again or call us directly.';
        }
      } catch (err) {
        banner.className = 'banner error';
        banner.textContent = 'Something went wrong. Please try again or call us directly.';
      }
      banner.hidden = false;
      button.disabled = false;
      button.textContent = idleLabel;
    });
  }
  document.querySelectorAll('form[data-lead-form]').forEach(bind);
  var dialog = document.getElementById('enquiry-modal');
  document.querySelectorAll('[data-enquire]').forEach(function (trigger) {
    trigger.addEventListener('click', function () {
      dialog.querySelector('input[name=propertyInterest]').value = trigger.dataset.enquire;
      dialog.querySelector('.modal-title').textContent = trigger.dataset.enquire;
      dialog.showModal();
    });
  });
  dialog.querySelector('[data-close]').addEventListener('click', function () { dialog.close(); });
})();
"#;

fn listing_card(listing: &Listing) -> String {
    format!(
        r#"<article class="card"><h3>{title}</h3><p>{kind} · {bedrooms} bed · {community}</p><p>By {developer}</p><p><strong>From {price}</strong></p><button type="button" data-enquire="{interest}">Enquire</button></article>"#,
        title = text(listing.title),
        kind = text(listing.kind),
        bedrooms = text(listing.bedrooms),
        community = text(listing.community),
        developer = text(listing.developer),
        price = text(listing.price_from),
        interest = attr(listing.title),
    )
}

fn testimonial_card(testimonial: &Testimonial) -> String {
    format!(
        r#"<blockquote class="card"><p>“{quote}”</p><footer>{author}, {origin}</footer></blockquote>"#,
        quote = text(testimonial.quote),
        author = text(testimonial.author),
        origin = text(testimonial.origin),
    )
}

fn faq_item(faq: &Faq) -> String {
    format!(
        "<details class=\"card\"><summary>{}</summary><p>{}</p></details>",
        text(faq.question),
        text(faq.answer)
    )
}

fn contact_form() -> String {
    format!(
        r#"<form data-lead-form="page" data-fixed-country="{country}" data-fixed-property-type="{kind}">
<input name="name" placeholder="Full name" required>
<input name="phone" type="tel" placeholder="Phone / WhatsApp" required>
<input name="email" type="email" placeholder="Email" required>
<textarea name="message" rows="4" placeholder="Tell us what you are looking for"></textarea>
<button type="submit">Send Enquiry</button>
<div class="banner" role="status" hidden></div>
</form>"#,
        country = attr(PAGE_COUNTRY),
        kind = attr(PAGE_PROPERTY_TYPE),
    )
}

fn enquiry_modal() -> String {
    format!(
        r#"<dialog id="enquiry-modal"><h3>Enquire: <span class="modal-title"></span></h3>
<form data-lead-form="modal" data-close-delay-ms="{delay}">
<input type="hidden" name="propertyInterest">
<input name="name" placeholder="Full name" required>
<input name="phone" type="tel" placeholder="Phone / WhatsApp" required>
<input name="email" type="email" placeholder="Email" required>
<input name="country" placeholder="Country of residence">
<input name="propertyType" placeholder="Property type (villa, penthouse...)">
<textarea name="message" rows="3" placeholder="Your requirement"></textarea>
<button type="submit">Request Details</button>
<div class="banner" role="status" hidden></div>
</form>
<button type="button" data-close>Close</button></dialog>"#,
        delay = MODAL_CLOSE_DELAY.as_millis(),
    )
}

/// Renders the full landing page.
pub fn render_home_page() -> String {
    let listings: String = LISTINGS.iter().map(listing_card).collect();
    let partners: String = DEVELOPERS
        .iter()
        .map(|d| format!("<span>{}</span>", text(d)))
        .collect();
    let testimonials: String = TESTIMONIALS.iter().map(testimonial_card).collect();
    let faqs: String = FAQS.iter().map(faq_item).collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="preconnect" href="https://fonts.googleapis.com">
<style>{css}</style>
</head>
<body>
<nav id="navbar"><div class="logo-text">Rishi Malik</div>
<ul class="nav-links"><li><a href="#properties">Properties</a></li><li><a href="#about">About</a></li><li><a href="#contact">Contact</a></li></ul></nav>
<section class="hero" id="home"><h1>Dubai's Ultra-Luxury Property Expert</h1><p>CEO of ACE Elite Properties</p><a href="#contact">Book a private consultation</a></section>
<section id="properties"><h2>Featured Properties</h2><div class="grid">{listings}</div></section>
<section id="about"><h2>Developer Partners</h2><div class="partners">{partners}</div></section>
<section id="testimonials"><h2>What Clients Say</h2><div class="grid">{testimonials}</div></section>
<section id="faq"><h2>Frequently Asked Questions</h2>{faqs}</section>
<section id="contact"><h2>Start Your Search</h2>{contact_form}</section>
{modal}
<script>{script}</script>
</body>
</html>"##,
        title = text(PAGE_TITLE),
        description = attr(PAGE_DESCRIPTION),
        css = CSS,
        listings = listings,
        partners = partners,
        testimonials = testimonials,
        faqs = faqs,
        contact_form = contact_form(),
        modal = enquiry_modal(),
        script = FORM_SCRIPT,
    )
}

/// GET /
pub async fn home_page() -> Html<String> {
    Html(render_home_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_every_section() {
        let page = render_home_page();
        for anchor in [
            "id=\"properties\"",
            "id=\"about\"",
            "id=\"testimonials\"",
            "id=\"faq\"",
            "id=\"contact\"",
        ] {
            assert!(page.contains(anchor), "missing {}", anchor);
        }
        assert!(page.contains("<title>Rishi Malik - Dubai's Ultra-Luxury Property Expert"));
        for developer in DEVELOPERS {
            assert!(page.contains(developer));
        }
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        let page = render_home_page();
        for link in [
            r##"<a href="#properties">Properties</a>"##,
            r##"<a href="#about">About</a>"##,
            r##"<a href="#contact">Contact</a>"##,
        ] {
            assert!(page.contains(link), "missing {}", link);
        }
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_form_carries_fixed_values() {
        let page = render_home_page();
        assert!(page.contains("data-fixed-country=\"UAE\""));
        assert!(page.contains("data-fixed-property-type=\"Luxury Real Estate\""));
        assert!(page.contains("data-close-delay-ms=\"3000\""));
        assert_eq!(page.matches("data-enquire=").count(), LISTINGS.len());
    }

    #[test]
    fn test_required_inputs_marked() {
        let page = render_home_page();
        // name, phone and email on both forms
        assert_eq!(page.matches(" required>").count(), 6);
    }
}
