//! Doctor dashboard: loading placeholder, access-denied panel and the tabbed
//! workspace.

use leptos::prelude::*;

use crate::domain::{Appointment, AppointmentStatus, Client, Session};
use crate::state::{Tab, Workspace, first_name, user_initials};
use crate::ui::components::{
    Avatar, Badge, BadgeVariant, Button, ButtonLink, ButtonSize, ButtonVariant, CalendarIcon,
    Card, CardContent, CardHeader, CardTitle, EditIcon, HomeIcon, LoaderIcon, LogOutIcon,
    MailIcon, PlusIcon, Separator, ShieldIcon, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, Tabs, TabsContent, TabsList, TabsTrigger, TrashIcon, UserIcon,
    UsersIcon,
};

/// Everything the authorized dashboard renders.
#[derive(Debug, Clone)]
pub struct WorkspaceData {
    pub session: Session,
    pub workspace: Workspace,
    pub clients: Vec<Client>,
    pub appointments: Vec<Appointment>,
}

/// Placeholder shown while the session lookup is pending.
#[component]
pub fn DashboardLoading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center" data-dashboard="loading">
            <div class="text-center">
                <LoaderIcon class="animate-spin h-12 w-12 text-blue-600 mx-auto mb-4"/>
                <p class="text-slate-500">"Loading your dashboard..."</p>
            </div>
        </div>
    }
}

/// Panel shown when there is no session.
#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center" data-dashboard="unauthorized">
            <Card class="w-full max-w-md">
                <CardContent class="pt-6">
                    <div class="text-center">
                        <ShieldIcon class="h-12 w-12 text-slate-400 mx-auto mb-4"/>
                        <h2 class="text-xl font-semibold mb-2">"Access Denied"</h2>
                        <p class="text-slate-500 mb-4">"Please log in to access your dashboard."</p>
                        <ButtonLink href="/login" class="w-full">
                            "Go to Login"
                        </ButtonLink>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

/// Authorized dashboard.
#[component]
pub fn DashboardWorkspace(data: WorkspaceData) -> impl IntoView {
    let WorkspaceData {
        session,
        workspace,
        clients,
        appointments,
    } = data;
    let client_count = clients.len();
    let appointment_count = appointments.len();

    view! {
        <div class="min-h-screen bg-gray-50" data-dashboard="authorized">
            <DashboardHeader/>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Tabs>
                    <TabsList>
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| view! {
                                <TabsTrigger value=tab.slug() active=workspace.is_active(tab)>
                                    {tab.label()}
                                </TabsTrigger>
                            })
                            .collect::<Vec<_>>()}
                    </TabsList>

                    <TabsContent value=Tab::Profile.slug() active=workspace.is_active(Tab::Profile)>
                        <ProfilePanel
                            session=session
                            client_count=client_count
                            appointment_count=appointment_count
                        />
                    </TabsContent>

                    <TabsContent value=Tab::Clients.slug() active=workspace.is_active(Tab::Clients)>
                        <ClientsPanel clients=clients/>
                    </TabsContent>

                    <TabsContent
                        value=Tab::Appointments.slug()
                        active=workspace.is_active(Tab::Appointments)
                    >
                        <AppointmentsPanel appointments=appointments/>
                    </TabsContent>
                </Tabs>
            </div>
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    view! {
        <div class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">"Doctor Dashboard"</h1>
                    <div class="flex items-center gap-2">
                        <ButtonLink href="/" variant=ButtonVariant::Ghost>
                            <HomeIcon/>
                            "Back to Home"
                        </ButtonLink>
                        <form method="post" action="/logout">
                            <Button button_type="submit" variant=ButtonVariant::Ghost>
                                <LogOutIcon/>
                                "Logout"
                            </Button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfilePanel(session: Session, client_count: usize, appointment_count: usize) -> impl IntoView {
    let user = session.user;
    let display_name = user.display_name().map(str::to_string);
    let initials = user_initials(display_name.as_deref());
    let welcome = format!(
        "Welcome back, {}!",
        first_name(display_name.as_deref()).unwrap_or("Doctor")
    );
    let alt = display_name.clone().unwrap_or_else(|| "User".to_string());
    let name = display_name.unwrap_or_default();
    let member_since = user.created_at.format("%B %-d, %Y").to_string();
    let (verified_variant, verified_label) = if user.email_verified {
        (BadgeVariant::Default, "Verified")
    } else {
        (BadgeVariant::Secondary, "Unverified")
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <Card class="md:col-span-1">
                <CardHeader>
                    <CardTitle>
                        <UserIcon class="h-5 w-5"/>
                        "Profile"
                    </CardTitle>
                </CardHeader>
                <CardContent class="space-y-4">
                    <div class="flex items-center space-x-4">
                        <Avatar src=user.image alt=alt fallback=initials size="h-16 w-16"/>
                        <div>
                            <h3 class="font-semibold text-lg">{name}</h3>
                            <p class="text-sm text-slate-500">{user.email}</p>
                        </div>
                    </div>

                    <Separator/>

                    <div class="space-y-3">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-2">
                                <MailIcon class="text-slate-500"/>
                                <span class="text-sm">"Email"</span>
                            </div>
                            <Badge variant=verified_variant>{verified_label}</Badge>
                        </div>
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-2">
                                <CalendarIcon class="text-slate-500"/>
                                <span class="text-sm">"Member since"</span>
                            </div>
                            <span class="text-sm text-slate-500">{member_since}</span>
                        </div>
                    </div>
                </CardContent>
            </Card>

            <div class="md:col-span-2 space-y-6">
                <Card>
                    <CardHeader>
                        <CardTitle>{welcome}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p class="text-slate-500 mb-4">
                            "Manage your clients and appointments from this dashboard."
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <StatCard value=client_count label="Total Clients"/>
                            <StatCard value=appointment_count label="Upcoming Appointments"/>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn StatCard(value: usize, label: &'static str) -> impl IntoView {
    let value = value.to_string();

    view! {
        <Card>
            <CardContent class="pt-6">
                <div class="text-center">
                    <div class="text-2xl font-bold text-blue-600" data-stat=label>{value}</div>
                    <p class="text-sm text-slate-500">{label}</p>
                </div>
            </CardContent>
        </Card>
    }
}

/// Edit and delete buttons. Not wired to any action.
#[component]
fn RowActions() -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm label="Edit">
                <EditIcon/>
            </Button>
            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm label="Delete">
                <TrashIcon/>
            </Button>
        </div>
    }
}

#[component]
fn ClientsPanel(clients: Vec<Client>) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>
                    <UsersIcon class="h-5 w-5"/>
                    "Client Management"
                </CardTitle>
            </CardHeader>
            <CardContent>
                <div class="space-y-6">
                    <div class="flex justify-between items-center">
                        <h3 class="font-semibold">"Client List"</h3>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>
                            <PlusIcon class="mr-2"/>
                            "Add Client"
                        </Button>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHead>"Name"</TableHead>
                                <TableHead>"Email"</TableHead>
                                <TableHead>"Phone"</TableHead>
                                <TableHead>"Last Visit"</TableHead>
                                <TableHead>"Actions"</TableHead>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {clients
                                .into_iter()
                                .map(|client| view! {
                                    <TableRow {..} data-row="client" data-id=client.id>
                                        <TableCell>{client.name}</TableCell>
                                        <TableCell>{client.email}</TableCell>
                                        <TableCell>{client.phone}</TableCell>
                                        <TableCell>{client.last_visit}</TableCell>
                                        <TableCell><RowActions/></TableCell>
                                    </TableRow>
                                })
                                .collect::<Vec<_>>()}
                        </TableBody>
                    </Table>
                </div>
            </CardContent>
        </Card>
    }
}

fn status_variant(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Scheduled => BadgeVariant::Default,
        AppointmentStatus::Pending => BadgeVariant::Secondary,
    }
}

#[component]
fn AppointmentsPanel(appointments: Vec<Appointment>) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>
                    <CalendarIcon class="h-5 w-5"/>
                    "Appointment Management"
                </CardTitle>
            </CardHeader>
            <CardContent>
                <div class="space-y-6">
                    <div class="flex justify-between items-center">
                        <h3 class="font-semibold">"Upcoming Appointments"</h3>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>
                            <PlusIcon class="mr-2"/>
                            "Schedule Appointment"
                        </Button>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHead>"Client"</TableHead>
                                <TableHead>"Date"</TableHead>
                                <TableHead>"Time"</TableHead>
                                <TableHead>"Status"</TableHead>
                                <TableHead>"Actions"</TableHead>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {appointments
                                .into_iter()
                                .map(|appt| view! {
                                    <TableRow {..} data-row="appointment" data-id=appt.id>
                                        <TableCell>{appt.client}</TableCell>
                                        <TableCell>{appt.date}</TableCell>
                                        <TableCell>{appt.time}</TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(appt.status)>
                                                {appt.status.label()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell><RowActions/></TableCell>
                                    </TableRow>
                                })
                                .collect::<Vec<_>>()}
                        </TableBody>
                    </Table>
                </div>
            </CardContent>
        </Card>
    }
}
