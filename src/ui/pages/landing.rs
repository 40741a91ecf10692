//! Public marketing page.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::state::NavVariant;
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonLink, ButtonSize, ButtonVariant, Card, CardContent,
    ClockIcon, Field, HeartIcon, Input, StethoscopeIcon, Textarea, UserIcon, UsersIcon,
};

/// Headline numbers for the stats grid: (value, label).
pub const STATS: [(&str, &str); 4] = [
    ("15+", "Years Experience"),
    ("5000+", "Happy Patients"),
    ("98%", "Success Rate"),
    ("20+", "Awards Won"),
];

/// Services offered, with their badge gradient.
pub const SERVICES: [(&str, &str); 6] = [
    ("General Checkup", "from-blue-400 to-green-400"),
    ("Cardiology", "from-green-400 to-blue-400"),
    ("Pediatrics", "from-blue-500 to-green-500"),
    ("Dermatology", "from-green-500 to-blue-500"),
    ("Neurology", "from-blue-400 to-green-500"),
    ("Orthopedics", "from-green-400 to-blue-500"),
];

#[derive(Debug, Clone, Copy)]
enum Feature {
    PersonalizedCare,
    FlexibleHours,
    ExpertTeam,
    ModernFacilities,
}

impl Feature {
    const ALL: [Feature; 4] = [
        Feature::PersonalizedCare,
        Feature::FlexibleHours,
        Feature::ExpertTeam,
        Feature::ModernFacilities,
    ];

    fn title(self) -> &'static str {
        match self {
            Self::PersonalizedCare => "Personalized Care",
            Self::FlexibleHours => "Flexible Hours",
            Self::ExpertTeam => "Expert Team",
            Self::ModernFacilities => "Modern Facilities",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::PersonalizedCare => {
                "Individual attention and tailored treatment plans for every patient"
            }
            Self::FlexibleHours => "Extended hours and emergency appointments available",
            Self::ExpertTeam => "Board-certified physicians and supportive staff",
            Self::ModernFacilities => "State-of-the-art equipment and comfortable environment",
        }
    }

    fn icon(self) -> AnyView {
        match self {
            Self::PersonalizedCare => view! { <HeartIcon class="w-8 h-8 text-blue-500"/> }.into_any(),
            Self::FlexibleHours => view! { <ClockIcon class="w-8 h-8 text-green-500"/> }.into_any(),
            Self::ExpertTeam => view! { <UsersIcon class="w-8 h-8 text-blue-500"/> }.into_any(),
            Self::ModernFacilities => {
                view! { <StethoscopeIcon class="w-8 h-8 text-green-500"/> }.into_any()
            }
        }
    }
}

fn auth_marker(variant: &NavVariant) -> &'static str {
    if variant.is_authenticated() {
        "authenticated"
    } else {
        "anonymous"
    }
}

/// Landing page body.
#[component]
pub fn LandingPage(
    /// Practice display name.
    practice_name: String,
    /// Navigation variant for the current session.
    variant: NavVariant,
) -> impl IntoView {
    let year = Utc::now().year().to_string();
    let copyright = format!("© {year} {practice_name}. Your health is our priority.");
    let why_choose = format!("Why Choose {practice_name}?");

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-900 via-green-900 to-blue-900">
            <LandingHeader practice_name=practice_name.clone() variant=variant.clone()/>
            <Hero practice_name=practice_name variant=variant/>

            <section class="container mx-auto px-4 py-12">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <Card class="bg-white/5 backdrop-blur-sm p-6 text-center border-white/10">
                                <CardContent class="p-0">
                                    <div class="text-2xl font-bold text-white mb-2">{value}</div>
                                    <div class="text-gray-400">{label}</div>
                                </CardContent>
                            </Card>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="features" class="container mx-auto px-4 py-20">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-white mb-4">{why_choose}</h2>
                    <p class="text-gray-300 max-w-2xl mx-auto">
                        "Comprehensive healthcare services with a patient-first approach"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {Feature::ALL
                        .into_iter()
                        .map(|feature| view! {
                            <Card class="bg-white/5 backdrop-blur-sm p-6 border-white/10 hover:border-blue-500/50 transition-all">
                                <CardContent class="p-0">
                                    <div class="mb-4">{feature.icon()}</div>
                                    <h3 class="text-xl font-semibold text-white mb-2">{feature.title()}</h3>
                                    <p class="text-gray-400">{feature.description()}</p>
                                </CardContent>
                            </Card>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="services" class="container mx-auto px-4 py-20">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-white mb-4">"Our Services"</h2>
                    <p class="text-gray-300 max-w-2xl mx-auto">
                        "Wide range of medical services to meet your needs"
                    </p>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-6 gap-8">
                    {SERVICES
                        .into_iter()
                        .map(|(name, gradient)| {
                            let tile = format!(
                                "w-16 h-16 mx-auto mb-3 rounded-xl bg-gradient-to-br {gradient} flex items-center justify-center"
                            );
                            let initial = name.chars().next().map(String::from).unwrap_or_default();
                            view! {
                                <div class="text-center">
                                    <div class=tile>
                                        <span class="text-white font-bold text-lg">{initial}</span>
                                    </div>
                                    <Badge variant=BadgeVariant::Plain class="text-gray-300 font-medium">
                                        {name}
                                    </Badge>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <AppointmentRequest/>

            <footer class="container mx-auto px-4 py-8 border-t border-white/10">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="text-gray-400 mb-4 md:mb-0">{copyright}</div>
                    <div class="flex space-x-6">
                        <a href="#services" class="text-gray-400 hover:text-white transition-colors">"Services"</a>
                        <a href="#appointment" class="text-gray-400 hover:text-white transition-colors">"Contact"</a>
                        <a href="#" class="text-gray-400 hover:text-white transition-colors">"Privacy"</a>
                    </div>
                </div>
            </footer>
        </div>
    }
}

/// Header navigation.
#[component]
fn LandingHeader(practice_name: String, variant: NavVariant) -> impl IntoView {
    let marker = auth_marker(&variant);

    let actions = match variant {
        NavVariant::Authenticated { first_name } => {
            let welcome = format!("Welcome, {first_name}!");
            view! {
                <div class="flex items-center space-x-4">
                    <span class="text-gray-300" data-nav="welcome">{welcome}</span>
                    <ButtonLink href="/dashboard">
                        <UserIcon class="mr-2"/>
                        "Dashboard"
                    </ButtonLink>
                </div>
            }
            .into_any()
        }
        NavVariant::Anonymous => view! {
            <div class="flex items-center space-x-2">
                <ButtonLink href="/login" variant=ButtonVariant::Ghost class="text-gray-300 hover:text-white">
                    "Login"
                </ButtonLink>
                <ButtonLink href="/register">
                    "Get Started"
                </ButtonLink>
            </div>
        }
        .into_any(),
    };

    view! {
        <header class="container mx-auto px-4 py-6">
            <nav class="flex items-center justify-between">
                <a href="/" class="flex items-center space-x-2">
                    <div class="w-8 h-8 bg-gradient-to-r from-blue-500 to-green-500 rounded-lg flex items-center justify-center">
                        <StethoscopeIcon class="w-5 h-5 text-white"/>
                    </div>
                    <span class="text-xl font-bold text-white">{practice_name}</span>
                </a>
                <div class="flex items-center space-x-4" data-region="header-nav" data-auth=marker>
                    <ButtonLink href="#services" variant=ButtonVariant::Ghost class="text-gray-300 hover:text-white">
                        "Services"
                    </ButtonLink>
                    {actions}
                </div>
            </nav>
        </header>
    }
}

/// Hero section with the primary call to action.
#[component]
fn Hero(practice_name: String, variant: NavVariant) -> impl IntoView {
    let marker = auth_marker(&variant);
    let highlight = format!(" {practice_name}");

    let cta = match variant {
        NavVariant::Authenticated { .. } => view! {
            <ButtonLink href="/dashboard" variant=ButtonVariant::Hero size=ButtonSize::Lg>
                "Go to Dashboard"
            </ButtonLink>
        }
        .into_any(),
        NavVariant::Anonymous => view! {
            <ButtonLink href="#appointment" variant=ButtonVariant::Hero size=ButtonSize::Lg>
                "Request Appointment"
            </ButtonLink>
        }
        .into_any(),
    };

    view! {
        <section class="container mx-auto px-4 py-20 text-center">
            <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                "Welcome to"
                <span class="bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent">
                    {highlight}
                </span>
            </h1>
            <p class="text-xl text-gray-300 mb-8 max-w-2xl mx-auto">
                "Providing expert medical care with compassion and modern technology. Book your appointment today."
            </p>
            <div class="flex flex-col sm:flex-row gap-4 justify-center" data-region="hero-cta" data-auth=marker>
                {cta}
                <ButtonLink href="#features" variant=ButtonVariant::Outline size=ButtonSize::Lg class="border-blue-500 text-blue-400">
                    "Learn More"
                </ButtonLink>
            </div>
        </section>
    }
}

/// Appointment request form. Submission is not wired to any backend.
#[component]
fn AppointmentRequest() -> impl IntoView {
    view! {
        <section id="appointment" class="container mx-auto px-4 py-20">
            <div class="bg-gradient-to-r from-blue-600/20 to-green-600/20 rounded-2xl p-12 text-center border border-blue-500/30 text-white">
                <h2 class="text-4xl font-bold mb-4">"Request an Appointment"</h2>
                <p class="text-gray-300 mb-8 max-w-2xl mx-auto">
                    "Fill out the form below to request your appointment. We will get back to you soon."
                </p>
                <form class="max-w-md mx-auto space-y-4" onsubmit="return false;">
                    <Field label="Name">
                        <Input name="name" placeholder="Your full name"/>
                    </Field>
                    <Field label="Email">
                        <Input input_type="email" name="email" placeholder="your@email.com"/>
                    </Field>
                    <Field label="Phone">
                        <Input input_type="tel" name="phone" placeholder="Your phone number"/>
                    </Field>
                    <Field label="Preferred Date">
                        <Input input_type="date" name="date"/>
                    </Field>
                    <Field label="Service">
                        <select name="service" class="flex h-10 w-full rounded-lg border border-slate-300 bg-white px-3 text-sm text-slate-900">
                            <option>"General Checkup"</option>
                            <option>"Cardiology"</option>
                            <option>"Pediatrics"</option>
                        </select>
                    </Field>
                    <Field label="Message">
                        <Textarea name="message" placeholder="Any additional information"/>
                    </Field>
                    <Button button_type="submit" class="w-full">
                        "Submit Request"
                    </Button>
                </form>
            </div>
        </section>
    }
}
